use log::debug;

use crate::action::{interval_accessors, Action, Interval};
use crate::error::ActionError;
use crate::target::{Capabilities, Target};

/// Run one action, then another.
///
/// Progress is split at `split = duration(first) / duration(total)` and
/// remapped into the active child's local progress. Whenever the active child
/// changes, the outgoing child is driven to its terminal state and stopped
/// before the incoming one starts.
#[derive(Clone, Debug)]
pub struct Sequence {
    interval: Interval,
    actions: [Box<dyn Action>; 2],
    split: f32,
    last: Option<usize>,
}

impl Sequence {
    pub fn new(first: Box<dyn Action>, second: Box<dyn Action>) -> Self {
        let interval = Interval::new(first.duration() + second.duration());
        let split = first.duration() / interval.duration();
        Self {
            interval,
            actions: [first, second],
            split,
            last: None,
        }
    }

    pub fn split_point(&self) -> f32 {
        self.split
    }

    pub fn first(&self) -> &dyn Action {
        self.actions[0].as_ref()
    }

    pub fn second(&self) -> &dyn Action {
        self.actions[1].as_ref()
    }

    /// Index of the child that received the last update, if any.
    pub fn active_index(&self) -> Option<usize> {
        self.last
    }

    /// Both children reversed, in swapped order.
    pub fn reverse(&self) -> Result<Sequence, ActionError> {
        Ok(Sequence::new(
            self.actions[1].reverse_action()?,
            self.actions[0].reverse_action()?,
        ))
    }

    /// Active child and its local progress for overall progress `t`.
    fn locate(&self, t: f32) -> (usize, f32) {
        if t >= self.split {
            let local = if self.split == 1.0 {
                1.0
            } else {
                (t - self.split) / (1.0 - self.split)
            };
            (1, local)
        } else {
            let local = if self.split != 0.0 { t / self.split } else { 1.0 };
            (0, local)
        }
    }
}

/// Chain any number of actions, right-folded into nested pairs.
pub fn sequence(actions: Vec<Box<dyn Action>>) -> Result<Box<dyn Action>, ActionError> {
    let mut iter = actions.into_iter().rev();
    let mut acc = iter.next().ok_or(ActionError::EmptyActionList {
        combinator: "sequence",
    })?;
    for action in iter {
        acc = Box::new(Sequence::new(action, acc));
    }
    Ok(acc)
}

impl Action for Sequence {
    interval_accessors!();

    fn name(&self) -> &'static str {
        "sequence"
    }

    fn requirements(&self) -> Capabilities {
        self.actions[0].requirements() | self.actions[1].requirements()
    }

    fn start(&mut self, _target: &mut dyn Target) {
        self.interval.reset();
        self.split = self.actions[0].duration() / self.interval.duration();
        self.last = None;
    }

    fn stop(&mut self, target: &mut dyn Target) {
        self.actions[0].stop(target);
        self.actions[1].stop(target);
    }

    fn update(&mut self, t: f32, target: &mut dyn Target) {
        let (found, local_t) = self.locate(t);

        if self.last.is_none() && found == 1 {
            // Jumped straight past the first child: still apply its end state.
            let first = &mut self.actions[0];
            first.start(target);
            first.update(1.0, target);
            first.stop(target);
        }

        if self.last != Some(found) {
            if let Some(prev) = self.last {
                debug!("sequence crossing boundary {prev} -> {found} at t={t}");
                self.actions[prev].update(1.0, target);
                self.actions[prev].stop(target);
            }
            self.actions[found].start(target);
        }

        self.actions[found].update(local_t, target);
        self.last = Some(found);
    }

    fn reverse_action(&self) -> Result<Box<dyn Action>, ActionError> {
        Ok(Box::new(self.reverse()?))
    }
}
