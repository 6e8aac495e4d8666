use crate::action::{interval_accessors, Action, Interval, Reversible};
use crate::error::ActionError;
use crate::interp::{channel_lerp, channel_offset};
use crate::target::{Capabilities, Target};
use crate::value::Color3;

/// Tint toward an absolute color. Not reversible.
#[derive(Clone, Debug)]
pub struct TintTo {
    interval: Interval,
    to: Color3,
    from: Color3,
}

impl TintTo {
    pub fn new(duration: f32, color: Color3) -> Self {
        Self {
            interval: Interval::new(duration),
            to: color,
            from: Color3::WHITE,
        }
    }
}

impl Action for TintTo {
    interval_accessors!();

    fn name(&self) -> &'static str {
        "tint_to"
    }

    fn requirements(&self) -> Capabilities {
        Capabilities::TINT
    }

    fn start(&mut self, target: &mut dyn Target) {
        self.interval.reset();
        if let Some(node) = target.tintable() {
            self.from = node.color();
        }
    }

    fn update(&mut self, t: f32, target: &mut dyn Target) {
        if let Some(node) = target.tintable() {
            node.set_color(Color3::new(
                channel_lerp(self.from.r, self.to.r, t),
                channel_lerp(self.from.g, self.to.g, t),
                channel_lerp(self.from.b, self.to.b, t),
            ));
        }
    }
}

/// Tint by a signed per-channel delta.
#[derive(Clone, Debug)]
pub struct TintBy {
    interval: Interval,
    delta: [i16; 3],
    from: [i16; 3],
}

impl TintBy {
    pub fn new(duration: f32, dr: i16, dg: i16, db: i16) -> Self {
        Self {
            interval: Interval::new(duration),
            delta: [dr, dg, db],
            from: [0; 3],
        }
    }

    pub fn delta(&self) -> [i16; 3] {
        self.delta
    }
}

impl Action for TintBy {
    interval_accessors!();

    fn name(&self) -> &'static str {
        "tint_by"
    }

    fn requirements(&self) -> Capabilities {
        Capabilities::TINT
    }

    fn start(&mut self, target: &mut dyn Target) {
        self.interval.reset();
        if let Some(node) = target.tintable() {
            self.from = node.color().to_i16();
        }
    }

    fn update(&mut self, t: f32, target: &mut dyn Target) {
        if let Some(node) = target.tintable() {
            node.set_color(Color3::new(
                channel_offset(self.from[0], self.delta[0], t),
                channel_offset(self.from[1], self.delta[1], t),
                channel_offset(self.from[2], self.delta[2], t),
            ));
        }
    }

    fn reverse_action(&self) -> Result<Box<dyn Action>, ActionError> {
        Ok(Box::new(self.reverse()))
    }
}

impl Reversible for TintBy {
    type Reversed = TintBy;

    // NOTE: replays the same delta instead of negating it; a forward/reverse
    // pair does not restore the original color.
    fn reverse(&self) -> TintBy {
        let [dr, dg, db] = self.delta;
        TintBy::new(self.duration(), dr, dg, db)
    }
}
