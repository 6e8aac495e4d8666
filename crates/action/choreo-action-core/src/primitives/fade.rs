use crate::action::{interval_accessors, Action, Interval, Reversible};
use crate::error::ActionError;
use crate::interp::channel_lerp;
use crate::target::{Capabilities, Target};

/// Opacity 0 -> 255.
#[derive(Clone, Debug)]
pub struct FadeIn {
    interval: Interval,
}

impl FadeIn {
    pub fn new(duration: f32) -> Self {
        Self {
            interval: Interval::new(duration),
        }
    }
}

impl Action for FadeIn {
    interval_accessors!();

    fn name(&self) -> &'static str {
        "fade_in"
    }

    fn requirements(&self) -> Capabilities {
        Capabilities::TINT
    }

    fn update(&mut self, t: f32, target: &mut dyn Target) {
        if let Some(node) = target.tintable() {
            node.set_opacity((255.0 * t) as u8);
        }
    }

    fn reverse_action(&self) -> Result<Box<dyn Action>, ActionError> {
        Ok(Box::new(self.reverse()))
    }
}

impl Reversible for FadeIn {
    type Reversed = FadeOut;

    fn reverse(&self) -> FadeOut {
        FadeOut::new(self.duration())
    }
}

/// Opacity 255 -> 0.
#[derive(Clone, Debug)]
pub struct FadeOut {
    interval: Interval,
}

impl FadeOut {
    pub fn new(duration: f32) -> Self {
        Self {
            interval: Interval::new(duration),
        }
    }
}

impl Action for FadeOut {
    interval_accessors!();

    fn name(&self) -> &'static str {
        "fade_out"
    }

    fn requirements(&self) -> Capabilities {
        Capabilities::TINT
    }

    fn update(&mut self, t: f32, target: &mut dyn Target) {
        if let Some(node) = target.tintable() {
            node.set_opacity((255.0 * (1.0 - t)) as u8);
        }
    }

    fn reverse_action(&self) -> Result<Box<dyn Action>, ActionError> {
        Ok(Box::new(self.reverse()))
    }
}

impl Reversible for FadeOut {
    type Reversed = FadeIn;

    fn reverse(&self) -> FadeIn {
        FadeIn::new(self.duration())
    }
}

/// Opacity from whatever it is at start to a fixed value. Not reversible:
/// the "from" side is only known once the action runs.
#[derive(Clone, Debug)]
pub struct FadeTo {
    interval: Interval,
    to: u8,
    from: u8,
}

impl FadeTo {
    pub fn new(duration: f32, opacity: u8) -> Self {
        Self {
            interval: Interval::new(duration),
            to: opacity,
            from: 0,
        }
    }
}

impl Action for FadeTo {
    interval_accessors!();

    fn name(&self) -> &'static str {
        "fade_to"
    }

    fn requirements(&self) -> Capabilities {
        Capabilities::TINT
    }

    fn start(&mut self, target: &mut dyn Target) {
        self.interval.reset();
        if let Some(node) = target.tintable() {
            self.from = node.opacity();
        }
    }

    fn update(&mut self, t: f32, target: &mut dyn Target) {
        if let Some(node) = target.tintable() {
            node.set_opacity(channel_lerp(self.from, self.to, t));
        }
    }
}
