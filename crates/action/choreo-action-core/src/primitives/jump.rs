use crate::action::{interval_accessors, Action, Interval, Reversible};
use crate::error::ActionError;
use crate::interp::jump_arc;
use crate::target::{Capabilities, Target};
use crate::value::Vec2;

/// Displace by `delta` while bouncing `jumps` parabolic arcs of `height`.
#[derive(Clone, Debug)]
pub struct JumpBy {
    interval: Interval,
    delta: Vec2,
    height: f32,
    jumps: u32,
    start: Vec2,
}

impl JumpBy {
    pub fn new(duration: f32, delta: Vec2, height: f32, jumps: u32) -> Self {
        Self {
            interval: Interval::new(duration),
            delta,
            height,
            jumps,
            start: Vec2::ZERO,
        }
    }

    pub fn delta(&self) -> Vec2 {
        self.delta
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn jumps(&self) -> u32 {
        self.jumps
    }
}

/// Linear displacement plus the bounce arc on y.
fn jump_position(start: Vec2, delta: Vec2, height: f32, jumps: u32, t: f32) -> Vec2 {
    let x = delta.x * t;
    let y = jump_arc(height, jumps, t) + delta.y * t;
    Vec2::new(start.x + x, start.y + y)
}

impl Action for JumpBy {
    interval_accessors!();

    fn name(&self) -> &'static str {
        "jump_by"
    }

    fn requirements(&self) -> Capabilities {
        Capabilities::POSITION
    }

    fn start(&mut self, target: &mut dyn Target) {
        self.interval.reset();
        if let Some(node) = target.positionable() {
            self.start = node.position();
        }
    }

    fn update(&mut self, t: f32, target: &mut dyn Target) {
        if let Some(node) = target.positionable() {
            node.set_position(jump_position(
                self.start,
                self.delta,
                self.height,
                self.jumps,
                t,
            ));
        }
    }

    fn reverse_action(&self) -> Result<Box<dyn Action>, ActionError> {
        Ok(Box::new(self.reverse()))
    }
}

impl Reversible for JumpBy {
    type Reversed = JumpBy;

    /// Opposite displacement, same arc shape.
    fn reverse(&self) -> JumpBy {
        JumpBy::new(self.duration(), -self.delta, self.height, self.jumps)
    }
}

/// Jump to an absolute landing position.
#[derive(Clone, Debug)]
pub struct JumpTo {
    interval: Interval,
    end: Vec2,
    height: f32,
    jumps: u32,
    start: Vec2,
    delta: Vec2,
}

impl JumpTo {
    pub fn new(duration: f32, position: Vec2, height: f32, jumps: u32) -> Self {
        Self {
            interval: Interval::new(duration),
            end: position,
            height,
            jumps,
            start: Vec2::ZERO,
            delta: Vec2::ZERO,
        }
    }
}

impl Action for JumpTo {
    interval_accessors!();

    fn name(&self) -> &'static str {
        "jump_to"
    }

    fn requirements(&self) -> Capabilities {
        Capabilities::POSITION
    }

    fn start(&mut self, target: &mut dyn Target) {
        self.interval.reset();
        if let Some(node) = target.positionable() {
            self.start = node.position();
            self.delta = self.end - self.start;
        }
    }

    fn update(&mut self, t: f32, target: &mut dyn Target) {
        if let Some(node) = target.positionable() {
            node.set_position(jump_position(
                self.start,
                self.delta,
                self.height,
                self.jumps,
                t,
            ));
        }
    }
}
