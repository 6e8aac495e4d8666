use crate::action::{interval_accessors, Action, Interval, Reversible};
use crate::error::ActionError;
use crate::target::{Capabilities, Target};

/// Play a child backwards in time by feeding it `1 - t`.
#[derive(Clone, Debug)]
pub struct ReverseTime {
    interval: Interval,
    inner: Box<dyn Action>,
}

impl ReverseTime {
    pub fn new(inner: Box<dyn Action>) -> Self {
        Self {
            interval: Interval::new(inner.duration()),
            inner,
        }
    }

    pub fn inner(&self) -> &dyn Action {
        self.inner.as_ref()
    }
}

impl Action for ReverseTime {
    interval_accessors!();

    fn name(&self) -> &'static str {
        "reverse_time"
    }

    fn requirements(&self) -> Capabilities {
        self.inner.requirements()
    }

    fn start(&mut self, target: &mut dyn Target) {
        self.interval.reset();
        self.inner.start(target);
    }

    fn stop(&mut self, target: &mut dyn Target) {
        self.inner.stop(target);
    }

    fn update(&mut self, t: f32, target: &mut dyn Target) {
        self.inner.update(1.0 - t, target);
    }

    fn reverse_action(&self) -> Result<Box<dyn Action>, ActionError> {
        Ok(self.reverse())
    }
}

impl Reversible for ReverseTime {
    type Reversed = Box<dyn Action>;

    /// Undoing a time reversal yields the original child.
    fn reverse(&self) -> Box<dyn Action> {
        self.inner.duplicate()
    }
}
