use serde::{Deserialize, Serialize};

use crate::action::{interval_accessors, Action, Interval, Reversible};
use crate::error::ActionError;
use crate::interp::bezier_at;
use crate::target::{Capabilities, Target};
use crate::value::Vec2;

/// Cubic curve description. The curve starts at the origin of whatever
/// frame the points are expressed in.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BezierConfig {
    pub end_position: Vec2,
    pub control_point_1: Vec2,
    pub control_point_2: Vec2,
}

impl BezierConfig {
    pub fn new(control_point_1: Vec2, control_point_2: Vec2, end_position: Vec2) -> Self {
        Self {
            end_position,
            control_point_1,
            control_point_2,
        }
    }

    /// Same points re-expressed relative to `origin`.
    pub fn relative_to(&self, origin: Vec2) -> BezierConfig {
        BezierConfig {
            end_position: self.end_position - origin,
            control_point_1: self.control_point_1 - origin,
            control_point_2: self.control_point_2 - origin,
        }
    }

    /// The curve traced from its end back to its start, expressed relative
    /// to the end point.
    pub fn mirrored(&self) -> BezierConfig {
        BezierConfig {
            end_position: -self.end_position,
            control_point_1: self.control_point_2 - self.end_position,
            control_point_2: self.control_point_1 - self.end_position,
        }
    }

    /// Offset from the curve origin at progress `t`.
    pub fn point_at(&self, t: f32) -> Vec2 {
        Vec2::new(
            bezier_at(
                0.0,
                self.control_point_1.x,
                self.control_point_2.x,
                self.end_position.x,
                t,
            ),
            bezier_at(
                0.0,
                self.control_point_1.y,
                self.control_point_2.y,
                self.end_position.y,
                t,
            ),
        )
    }
}

/// Follow a cubic curve whose points are relative to the start position.
#[derive(Clone, Debug)]
pub struct BezierBy {
    interval: Interval,
    config: BezierConfig,
    start: Vec2,
}

impl BezierBy {
    pub fn new(duration: f32, config: BezierConfig) -> Self {
        Self {
            interval: Interval::new(duration),
            config,
            start: Vec2::ZERO,
        }
    }

    pub fn config(&self) -> &BezierConfig {
        &self.config
    }
}

impl Action for BezierBy {
    interval_accessors!();

    fn name(&self) -> &'static str {
        "bezier_by"
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
            node.set_position(self.start + self.config.point_at(t));
        }
    }

    fn reverse_action(&self) -> Result<Box<dyn Action>, ActionError> {
        Ok(Box::new(self.reverse()))
    }
}

impl Reversible for BezierBy {
    type Reversed = BezierBy;

    fn reverse(&self) -> BezierBy {
        BezierBy::new(self.duration(), self.config.mirrored())
    }
}

/// Follow a cubic curve given in absolute coordinates.
#[derive(Clone, Debug)]
pub struct BezierTo {
    interval: Interval,
    absolute: BezierConfig,
    relative: BezierConfig,
    start: Vec2,
}

impl BezierTo {
    pub fn new(duration: f32, config: BezierConfig) -> Self {
        Self {
            interval: Interval::new(duration),
            absolute: config,
            relative: config,
            start: Vec2::ZERO,
        }
    }
}

impl Action for BezierTo {
    interval_accessors!();

    fn name(&self) -> &'static str {
        "bezier_to"
    }

    fn requirements(&self) -> Capabilities {
        Capabilities::POSITION
    }

    fn start(&mut self, target: &mut dyn Target) {
        self.interval.reset();
        if let Some(node) = target.positionable() {
            self.start = node.position();
            self.relative = self.absolute.relative_to(self.start);
        }
    }

    fn update(&mut self, t: f32, target: &mut dyn Target) {
        if let Some(node) = target.positionable() {
            node.set_position(self.start + self.relative.point_at(t));
        }
    }
}
