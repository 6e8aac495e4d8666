use crate::action::{interval_accessors, Action, Interval, Reversible};
use crate::error::ActionError;
use crate::target::{Capabilities, Target};

/// Rotate to an absolute angle (degrees) along the shortest arc.
#[derive(Clone, Debug)]
pub struct RotateTo {
    interval: Interval,
    dst_angle: f32,
    start_angle: f32,
    diff_angle: f32,
}

impl RotateTo {
    pub fn new(duration: f32, angle: f32) -> Self {
        Self {
            interval: Interval::new(duration),
            dst_angle: angle,
            start_angle: 0.0,
            diff_angle: 0.0,
        }
    }

    pub fn angle(&self) -> f32 {
        self.dst_angle
    }
}

/// Shortest signed delta from `from` to `to`, with `from` normalized into
/// (-360, 360). Returns (normalized_from, delta) where delta is in [-180, 180].
fn shortest_arc(from: f32, to: f32) -> (f32, f32) {
    // `%` keeps the sign of the dividend, so negative angles stay negative.
    let start = from % 360.0;
    let mut diff = to - start;
    if diff > 180.0 {
        diff -= 360.0;
    }
    if diff < -180.0 {
        diff += 360.0;
    }
    (start, diff)
}

impl Action for RotateTo {
    interval_accessors!();

    fn name(&self) -> &'static str {
        "rotate_to"
    }

    fn requirements(&self) -> Capabilities {
        Capabilities::ROTATION
    }

    fn start(&mut self, target: &mut dyn Target) {
        self.interval.reset();
        if let Some(node) = target.rotatable() {
            let (start, diff) = shortest_arc(node.rotation(), self.dst_angle);
            self.start_angle = start;
            self.diff_angle = diff;
        }
    }

    fn update(&mut self, t: f32, target: &mut dyn Target) {
        if let Some(node) = target.rotatable() {
            node.set_rotation(self.start_angle + self.diff_angle * t);
        }
    }
}

/// Rotate by a relative angle (degrees).
#[derive(Clone, Debug)]
pub struct RotateBy {
    interval: Interval,
    angle: f32,
    start_angle: f32,
}

impl RotateBy {
    pub fn new(duration: f32, angle: f32) -> Self {
        Self {
            interval: Interval::new(duration),
            angle,
            start_angle: 0.0,
        }
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }
}

impl Action for RotateBy {
    interval_accessors!();

    fn name(&self) -> &'static str {
        "rotate_by"
    }

    fn requirements(&self) -> Capabilities {
        Capabilities::ROTATION
    }

    fn start(&mut self, target: &mut dyn Target) {
        self.interval.reset();
        if let Some(node) = target.rotatable() {
            self.start_angle = node.rotation();
        }
    }

    fn update(&mut self, t: f32, target: &mut dyn Target) {
        if let Some(node) = target.rotatable() {
            node.set_rotation(self.start_angle + self.angle * t);
        }
    }

    fn reverse_action(&self) -> Result<Box<dyn Action>, ActionError> {
        Ok(Box::new(self.reverse()))
    }
}

impl Reversible for RotateBy {
    type Reversed = RotateBy;

    fn reverse(&self) -> RotateBy {
        RotateBy::new(self.duration(), -self.angle)
    }
}
