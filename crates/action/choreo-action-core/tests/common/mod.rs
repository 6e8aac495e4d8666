#![allow(dead_code)]
//! Shared test targets and helpers.

use std::sync::{Arc, Mutex};

use choreo_action_core::{
    Action, Capabilities, Color3, FrameDisplay, Interval, Positionable, Rotatable, Scalable,
    SpriteFrame, Target, Tintable, Vec2, Visibility,
};

pub fn approx(a: f32, b: f32, eps: f32) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

pub fn approx_vec(a: Vec2, b: Vec2, eps: f32) {
    assert!(
        (a.x - b.x).abs() <= eps && (a.y - b.y).abs() <= eps,
        "left={a:?} right={b:?} eps={eps}"
    );
}

/// A node supporting every capability, with counters for frame writes.
#[derive(Clone, Debug, PartialEq)]
pub struct MockNode {
    pub position: Vec2,
    pub rotation: f32,
    pub scale: (f32, f32),
    pub opacity: u8,
    pub color: Color3,
    pub visible: bool,
    pub frame: Option<SpriteFrame>,
    pub frame_writes: usize,
}

impl Default for MockNode {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            rotation: 0.0,
            scale: (1.0, 1.0),
            opacity: 255,
            color: Color3::WHITE,
            visible: true,
            frame: None,
            frame_writes: 0,
        }
    }
}

impl Positionable for MockNode {
    fn position(&self) -> Vec2 {
        self.position
    }
    fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }
}

impl Rotatable for MockNode {
    fn rotation(&self) -> f32 {
        self.rotation
    }
    fn set_rotation(&mut self, degrees: f32) {
        self.rotation = degrees;
    }
}

impl Scalable for MockNode {
    fn scale_x(&self) -> f32 {
        self.scale.0
    }
    fn scale_y(&self) -> f32 {
        self.scale.1
    }
    fn set_scale_x(&mut self, scale: f32) {
        self.scale.0 = scale;
    }
    fn set_scale_y(&mut self, scale: f32) {
        self.scale.1 = scale;
    }
}

impl Tintable for MockNode {
    fn opacity(&self) -> u8 {
        self.opacity
    }
    fn set_opacity(&mut self, opacity: u8) {
        self.opacity = opacity;
    }
    fn color(&self) -> Color3 {
        self.color
    }
    fn set_color(&mut self, color: Color3) {
        self.color = color;
    }
}

impl Visibility for MockNode {
    fn is_visible(&self) -> bool {
        self.visible
    }
    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

impl FrameDisplay for MockNode {
    fn displayed_frame(&self) -> Option<SpriteFrame> {
        self.frame.clone()
    }
    fn set_displayed_frame(&mut self, frame: &SpriteFrame) {
        self.frame = Some(frame.clone());
        self.frame_writes += 1;
    }
    fn is_frame_displayed(&self, frame: &SpriteFrame) -> bool {
        self.frame.as_ref() == Some(frame)
    }
}

impl Target for MockNode {
    fn positionable(&mut self) -> Option<&mut dyn Positionable> {
        Some(self)
    }
    fn rotatable(&mut self) -> Option<&mut dyn Rotatable> {
        Some(self)
    }
    fn scalable(&mut self) -> Option<&mut dyn Scalable> {
        Some(self)
    }
    fn tintable(&mut self) -> Option<&mut dyn Tintable> {
        Some(self)
    }
    fn visibility(&mut self) -> Option<&mut dyn Visibility> {
        Some(self)
    }
    fn frame_display(&mut self) -> Option<&mut dyn FrameDisplay> {
        Some(self)
    }
}

/// A target that can only be moved.
#[derive(Clone, Debug, Default)]
pub struct PointNode {
    pub position: Vec2,
}

impl Positionable for PointNode {
    fn position(&self) -> Vec2 {
        self.position
    }
    fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }
}

impl Target for PointNode {
    fn positionable(&mut self) -> Option<&mut dyn Positionable> {
        Some(self)
    }
}

/// Lifecycle calls observed by a `Probe`.
#[derive(Clone, Debug, PartialEq)]
pub enum ProbeCall {
    Start,
    Update(f32),
    Stop,
}

pub type ProbeLog = Arc<Mutex<Vec<(&'static str, ProbeCall)>>>;

pub fn probe_log() -> ProbeLog {
    Arc::new(Mutex::new(Vec::new()))
}

/// Action with no effect that records every lifecycle call it receives.
#[derive(Clone, Debug)]
pub struct Probe {
    interval: Interval,
    label: &'static str,
    log: ProbeLog,
}

impl Probe {
    pub fn new(label: &'static str, duration: f32, log: &ProbeLog) -> Self {
        Self {
            interval: Interval::new(duration),
            label,
            log: Arc::clone(log),
        }
    }

    fn record(&self, call: ProbeCall) {
        self.log.lock().unwrap().push((self.label, call));
    }
}

impl Action for Probe {
    fn name(&self) -> &'static str {
        "probe"
    }
    fn interval(&self) -> &Interval {
        &self.interval
    }
    fn interval_mut(&mut self) -> &mut Interval {
        &mut self.interval
    }
    fn requirements(&self) -> Capabilities {
        Capabilities::empty()
    }
    fn duplicate(&self) -> Box<dyn Action> {
        Box::new(self.clone())
    }
    fn start(&mut self, _target: &mut dyn Target) {
        self.interval.reset();
        self.record(ProbeCall::Start);
    }
    fn update(&mut self, t: f32, _target: &mut dyn Target) {
        self.record(ProbeCall::Update(t));
    }
    fn stop(&mut self, _target: &mut dyn Target) {
        self.record(ProbeCall::Stop);
    }
}

/// Updates recorded for `label`, in order.
pub fn updates_for(log: &ProbeLog, label: &str) -> Vec<f32> {
    log.lock()
        .unwrap()
        .iter()
        .filter_map(|(l, c)| match c {
            ProbeCall::Update(t) if *l == label => Some(*t),
            _ => None,
        })
        .collect()
}

/// Every progress value a probe saw, across all labels.
pub fn all_updates(log: &ProbeLog) -> Vec<f32> {
    log.lock()
        .unwrap()
        .iter()
        .filter_map(|(_, c)| match c {
            ProbeCall::Update(t) => Some(*t),
            _ => None,
        })
        .collect()
}

/// Drive an action to completion with a fixed dt, then stop it.
/// Returns the number of steps taken.
pub fn run_to_end(action: &mut dyn Action, target: &mut dyn Target, dt: f32) -> usize {
    action.start(target);
    let mut steps = 0;
    while !action.is_done() {
        action.step(dt, target);
        steps += 1;
        assert!(steps < 100_000, "action never finished");
    }
    action.stop(target);
    steps
}
