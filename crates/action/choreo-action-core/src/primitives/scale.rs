use crate::action::{interval_accessors, Action, Interval, Reversible};
use crate::error::ActionError;
use crate::target::{Capabilities, Target};

/// Per-axis linear scale track captured at start.
#[derive(Clone, Copy, Debug, Default)]
struct ScaleTrack {
    start_x: f32,
    start_y: f32,
    delta_x: f32,
    delta_y: f32,
}

impl ScaleTrack {
    fn apply(&self, t: f32, target: &mut dyn Target) {
        if let Some(node) = target.scalable() {
            node.set_scale_x(self.start_x + self.delta_x * t);
            node.set_scale_y(self.start_y + self.delta_y * t);
        }
    }
}

/// Scale to absolute x/y factors.
#[derive(Clone, Debug)]
pub struct ScaleTo {
    interval: Interval,
    end_x: f32,
    end_y: f32,
    track: ScaleTrack,
}

impl ScaleTo {
    pub fn new(duration: f32, sx: f32, sy: f32) -> Self {
        Self {
            interval: Interval::new(duration),
            end_x: sx,
            end_y: sy,
            track: ScaleTrack::default(),
        }
    }

    pub fn uniform(duration: f32, s: f32) -> Self {
        Self::new(duration, s, s)
    }
}

impl Action for ScaleTo {
    interval_accessors!();

    fn name(&self) -> &'static str {
        "scale_to"
    }

    fn requirements(&self) -> Capabilities {
        Capabilities::SCALE
    }

    fn start(&mut self, target: &mut dyn Target) {
        self.interval.reset();
        if let Some(node) = target.scalable() {
            let (sx, sy) = (node.scale_x(), node.scale_y());
            self.track = ScaleTrack {
                start_x: sx,
                start_y: sy,
                delta_x: self.end_x - sx,
                delta_y: self.end_y - sy,
            };
        }
    }

    fn update(&mut self, t: f32, target: &mut dyn Target) {
        self.track.apply(t, target);
    }
}

/// Multiply the current scale by x/y factors.
#[derive(Clone, Debug)]
pub struct ScaleBy {
    interval: Interval,
    factor_x: f32,
    factor_y: f32,
    track: ScaleTrack,
}

impl ScaleBy {
    pub fn new(duration: f32, sx: f32, sy: f32) -> Self {
        Self {
            interval: Interval::new(duration),
            factor_x: sx,
            factor_y: sy,
            track: ScaleTrack::default(),
        }
    }

    pub fn uniform(duration: f32, s: f32) -> Self {
        Self::new(duration, s, s)
    }

    pub fn factors(&self) -> (f32, f32) {
        (self.factor_x, self.factor_y)
    }
}

impl Action for ScaleBy {
    interval_accessors!();

    fn name(&self) -> &'static str {
        "scale_by"
    }

    fn requirements(&self) -> Capabilities {
        Capabilities::SCALE
    }

    fn start(&mut self, target: &mut dyn Target) {
        self.interval.reset();
        if let Some(node) = target.scalable() {
            let (sx, sy) = (node.scale_x(), node.scale_y());
            self.track = ScaleTrack {
                start_x: sx,
                start_y: sy,
                delta_x: sx * self.factor_x - sx,
                delta_y: sy * self.factor_y - sy,
            };
        }
    }

    fn update(&mut self, t: f32, target: &mut dyn Target) {
        self.track.apply(t, target);
    }

    fn reverse_action(&self) -> Result<Box<dyn Action>, ActionError> {
        Ok(Box::new(self.reverse()))
    }
}

impl Reversible for ScaleBy {
    type Reversed = ScaleBy;

    /// Reciprocal factors. Only an exact inverse when the reversed action
    /// starts from the scale the forward action ended on.
    fn reverse(&self) -> ScaleBy {
        ScaleBy::new(self.duration(), 1.0 / self.factor_x, 1.0 / self.factor_y)
    }
}
