use crate::action::{interval_accessors, Action, Interval, Reversible};
use crate::error::ActionError;
use crate::target::{Capabilities, Target};

/// Waits out its duration without touching the target.
#[derive(Clone, Debug)]
pub struct DelayTime {
    interval: Interval,
}

impl DelayTime {
    pub fn new(duration: f32) -> Self {
        Self {
            interval: Interval::new(duration),
        }
    }
}

impl Action for DelayTime {
    interval_accessors!();

    fn name(&self) -> &'static str {
        "delay_time"
    }

    fn requirements(&self) -> Capabilities {
        Capabilities::empty()
    }

    fn update(&mut self, _t: f32, _target: &mut dyn Target) {}

    fn reverse_action(&self) -> Result<Box<dyn Action>, ActionError> {
        Ok(Box::new(self.reverse()))
    }
}

impl Reversible for DelayTime {
    type Reversed = DelayTime;

    fn reverse(&self) -> DelayTime {
        DelayTime::new(self.duration())
    }
}
