//! The action contract and its time-normalization base.
//!
//! Driver protocol: `start(target)` once, `step(dt, target)` each frame until
//! `is_done()`, then `stop(target)` exactly once. `step` turns elapsed time
//! into clamped progress and hands it to `update`, which combinators forward
//! to their children.

use std::fmt;

use log::debug;

use crate::error::ActionError;
use crate::target::{Capabilities, Target};

/// Substitute for a non-positive duration so progress never divides by zero.
pub const MIN_DURATION: f32 = f32::EPSILON;

/// Elapsed-time bookkeeping shared by every action.
#[derive(Clone, Debug, PartialEq)]
pub struct Interval {
    duration: f32,
    elapsed: f32,
    first_tick: bool,
}

impl Interval {
    pub fn new(duration: f32) -> Self {
        let duration = if duration <= 0.0 {
            debug!("interval duration {duration} coerced to {MIN_DURATION}");
            MIN_DURATION
        } else {
            duration
        };
        Self {
            duration,
            elapsed: 0.0,
            first_tick: true,
        }
    }

    #[inline]
    pub fn duration(&self) -> f32 {
        self.duration
    }

    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Back to the just-started state.
    #[inline]
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
        self.first_tick = true;
    }

    /// Accumulate `dt` and return progress in [0,1].
    /// The first tick after a reset records zero elapsed time regardless of `dt`.
    pub fn advance(&mut self, dt: f32) -> f32 {
        if self.first_tick {
            self.first_tick = false;
            self.elapsed = 0.0;
        } else {
            self.elapsed += dt;
        }
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// A stateful unit that mutates a target over a finite duration.
pub trait Action: fmt::Debug + Send {
    /// Short, stable kind name used in errors and logs.
    fn name(&self) -> &'static str;

    fn interval(&self) -> &Interval;
    fn interval_mut(&mut self) -> &mut Interval;

    /// Capabilities this action (and any children) writes through.
    fn requirements(&self) -> Capabilities;

    /// Deep copy of the whole action graph.
    fn duplicate(&self) -> Box<dyn Action>;

    fn duration(&self) -> f32 {
        self.interval().duration()
    }

    fn elapsed(&self) -> f32 {
        self.interval().elapsed()
    }

    /// Reset timing and capture whatever "from" state the action needs.
    fn start(&mut self, _target: &mut dyn Target) {
        self.interval_mut().reset();
    }

    /// Apply progress `t` in [0,1].
    fn update(&mut self, _t: f32, _target: &mut dyn Target) {}

    /// Release anything held since `start`. May be called before completion.
    fn stop(&mut self, _target: &mut dyn Target) {}

    fn step(&mut self, dt: f32, target: &mut dyn Target) {
        let t = self.interval_mut().advance(dt);
        self.update(t, target);
    }

    fn is_done(&self) -> bool {
        self.interval().is_done()
    }

    /// Semantic inverse as a fresh action.
    ///
    /// Kinds without inversion semantics keep this default and are rejected
    /// here, at the point the reversed action would be built.
    fn reverse_action(&self) -> Result<Box<dyn Action>, ActionError> {
        Err(ActionError::NotReversible {
            action: self.name(),
        })
    }
}

/// Statically reversible actions. Types without a meaningful inverse
/// (FadeTo, TintTo, the absolute "To" movers) do not implement this.
pub trait Reversible: Action {
    type Reversed: Action + 'static;

    fn reverse(&self) -> Self::Reversed;
}

impl Clone for Box<dyn Action> {
    fn clone(&self) -> Self {
        self.duplicate()
    }
}

impl Action for Box<dyn Action> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn interval(&self) -> &Interval {
        (**self).interval()
    }

    fn interval_mut(&mut self) -> &mut Interval {
        (**self).interval_mut()
    }

    fn requirements(&self) -> Capabilities {
        (**self).requirements()
    }

    fn duplicate(&self) -> Box<dyn Action> {
        (**self).duplicate()
    }

    fn duration(&self) -> f32 {
        (**self).duration()
    }

    fn elapsed(&self) -> f32 {
        (**self).elapsed()
    }

    fn start(&mut self, target: &mut dyn Target) {
        (**self).start(target)
    }

    fn update(&mut self, t: f32, target: &mut dyn Target) {
        (**self).update(t, target)
    }

    fn stop(&mut self, target: &mut dyn Target) {
        (**self).stop(target)
    }

    fn step(&mut self, dt: f32, target: &mut dyn Target) {
        (**self).step(dt, target)
    }

    fn is_done(&self) -> bool {
        (**self).is_done()
    }

    fn reverse_action(&self) -> Result<Box<dyn Action>, ActionError> {
        (**self).reverse_action()
    }
}

pub trait ActionExt: Action + Sized + 'static {
    fn boxed(self) -> Box<dyn Action> {
        Box::new(self)
    }
}

impl<T: Action + 'static> ActionExt for T {}

/// Boilerplate accessors for structs holding an `interval` field.
macro_rules! interval_accessors {
    () => {
        fn interval(&self) -> &$crate::action::Interval {
            &self.interval
        }

        fn interval_mut(&mut self) -> &mut $crate::action::Interval {
            &mut self.interval
        }

        fn duplicate(&self) -> Box<dyn $crate::action::Action> {
            Box::new(self.clone())
        }
    };
}

pub(crate) use interval_accessors;
