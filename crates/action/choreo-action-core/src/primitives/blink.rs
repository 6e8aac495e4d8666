use crate::action::{interval_accessors, Action, Interval, Reversible};
use crate::error::ActionError;
use crate::target::{Capabilities, Target};

/// Toggle visibility `times` times: each slice of 1/times is visible for its
/// first half and hidden for its second half.
#[derive(Clone, Debug)]
pub struct Blink {
    interval: Interval,
    times: u32,
}

impl Blink {
    pub fn new(duration: f32, times: u32) -> Result<Self, ActionError> {
        if times == 0 {
            return Err(ActionError::ZeroBlinks);
        }
        Ok(Self {
            interval: Interval::new(duration),
            times,
        })
    }

    pub fn times(&self) -> u32 {
        self.times
    }
}

/// Visibility at progress `t` for `times` blinks.
pub(crate) fn blink_visible(times: u32, t: f32) -> bool {
    let slice = 1.0 / times as f32;
    let m = t % slice;
    m < slice / 2.0
}

impl Action for Blink {
    interval_accessors!();

    fn name(&self) -> &'static str {
        "blink"
    }

    fn requirements(&self) -> Capabilities {
        Capabilities::VISIBILITY
    }

    fn update(&mut self, t: f32, target: &mut dyn Target) {
        if let Some(node) = target.visibility() {
            node.set_visible(blink_visible(self.times, t));
        }
    }

    fn reverse_action(&self) -> Result<Box<dyn Action>, ActionError> {
        Ok(Box::new(self.reverse()))
    }
}

impl Reversible for Blink {
    type Reversed = Blink;

    /// Blinking is symmetric in time.
    fn reverse(&self) -> Blink {
        Blink {
            interval: Interval::new(self.duration()),
            times: self.times,
        }
    }
}
