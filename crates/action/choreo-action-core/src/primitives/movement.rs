use crate::action::{interval_accessors, Action, Interval, Reversible};
use crate::error::ActionError;
use crate::interp::lerp_vec2;
use crate::target::{Capabilities, Target};
use crate::value::Vec2;

/// Move to an absolute position.
#[derive(Clone, Debug)]
pub struct MoveTo {
    interval: Interval,
    end: Vec2,
    start: Vec2,
}

impl MoveTo {
    pub fn new(duration: f32, position: Vec2) -> Self {
        Self {
            interval: Interval::new(duration),
            end: position,
            start: Vec2::ZERO,
        }
    }

    pub fn end(&self) -> Vec2 {
        self.end
    }
}

impl Action for MoveTo {
    interval_accessors!();

    fn name(&self) -> &'static str {
        "move_to"
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
            node.set_position(lerp_vec2(self.start, self.end, t));
        }
    }
}

/// Move by a fixed displacement. The displacement is part of the
/// definition and survives any number of restarts.
#[derive(Clone, Debug)]
pub struct MoveBy {
    interval: Interval,
    delta: Vec2,
    start: Vec2,
}

impl MoveBy {
    pub fn new(duration: f32, delta: Vec2) -> Self {
        Self {
            interval: Interval::new(duration),
            delta,
            start: Vec2::ZERO,
        }
    }

    pub fn delta(&self) -> Vec2 {
        self.delta
    }
}

impl Action for MoveBy {
    interval_accessors!();

    fn name(&self) -> &'static str {
        "move_by"
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
            node.set_position(self.start + self.delta * t);
        }
    }

    fn reverse_action(&self) -> Result<Box<dyn Action>, ActionError> {
        Ok(Box::new(self.reverse()))
    }
}

impl Reversible for MoveBy {
    type Reversed = MoveBy;

    fn reverse(&self) -> MoveBy {
        MoveBy::new(self.duration(), -self.delta)
    }
}
