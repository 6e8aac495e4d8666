use log::trace;

use crate::action::{interval_accessors, Action, Interval};
use crate::error::ActionError;
use crate::target::{Capabilities, Target};

/// Run a child `times` times back to back.
///
/// The child is restarted at each cycle boundary. A boundary crossed inside a
/// single large step finalizes the old cycle and carries the overshoot into
/// the new one, so there is no visible jerk.
#[derive(Clone, Debug)]
pub struct Repeat {
    interval: Interval,
    inner: Box<dyn Action>,
    times: u32,
    total: u32,
}

impl Repeat {
    pub fn new(inner: Box<dyn Action>, times: u32) -> Result<Self, ActionError> {
        if times == 0 {
            return Err(ActionError::ZeroRepeat);
        }
        Ok(Self {
            interval: Interval::new(inner.duration() * times as f32),
            inner,
            times,
            total: 0,
        })
    }

    pub fn times(&self) -> u32 {
        self.times
    }

    pub fn completed_cycles(&self) -> u32 {
        self.total
    }

    pub fn inner(&self) -> &dyn Action {
        self.inner.as_ref()
    }

    pub fn reverse(&self) -> Result<Repeat, ActionError> {
        Repeat::new(self.inner.reverse_action()?, self.times)
    }
}

impl Action for Repeat {
    interval_accessors!();

    fn name(&self) -> &'static str {
        "repeat"
    }

    fn requirements(&self) -> Capabilities {
        self.inner.requirements()
    }

    fn start(&mut self, target: &mut dyn Target) {
        self.total = 0;
        self.interval.reset();
        self.inner.start(target);
    }

    fn stop(&mut self, target: &mut dyn Target) {
        self.inner.stop(target);
    }

    fn update(&mut self, t: f32, target: &mut dyn Target) {
        let scaled = t * self.times as f32;
        if scaled > (self.total + 1) as f32 {
            self.inner.update(1.0, target);
            self.total += 1;
            trace!("repeat cycle {}/{} complete", self.total, self.times);
            self.inner.stop(target);
            self.inner.start(target);

            if self.total == self.times {
                // Over: park the child at its start rather than mid-cycle.
                self.inner.update(0.0, target);
            } else {
                let carry = scaled - self.total as f32;
                self.inner.update(carry.min(1.0), target);
            }
        } else {
            // Landing exactly on a boundary mid-run feeds 0; the restart
            // happens on the next update that crosses it.
            let mut r = scaled % 1.0;
            // The modulo would land the final frame on 0.
            if t == 1.0 {
                r = 1.0;
                if self.total < self.times {
                    self.total += 1;
                }
            }
            self.inner.update(r.min(1.0), target);
        }
    }

    fn is_done(&self) -> bool {
        self.total == self.times
    }

    fn reverse_action(&self) -> Result<Box<dyn Action>, ActionError> {
        Ok(Box::new(self.reverse()?))
    }
}
