use crate::action::{interval_accessors, Action, ActionExt, Interval};
use crate::combinators::sequence::Sequence;
use crate::error::ActionError;
use crate::primitives::DelayTime;
use crate::target::{Capabilities, Target};

/// Run two actions at once.
///
/// The shorter child is padded with a trailing delay so both report the same
/// duration and can share one progress value. A NaN duration loses the
/// comparison, so the other child's duration wins.
#[derive(Clone, Debug)]
pub struct Spawn {
    interval: Interval,
    one: Box<dyn Action>,
    two: Box<dyn Action>,
}

impl Spawn {
    pub fn new(one: Box<dyn Action>, two: Box<dyn Action>) -> Self {
        let d1 = one.duration();
        let d2 = two.duration();
        let longest = if d1 >= d2 || d2.is_nan() { d1 } else { d2 };

        let (one, two) = if d1 > d2 {
            (one, Sequence::new(two, DelayTime::new(d1 - d2).boxed()).boxed())
        } else if d1 < d2 {
            (Sequence::new(one, DelayTime::new(d2 - d1).boxed()).boxed(), two)
        } else {
            (one, two)
        };

        Self {
            interval: Interval::new(longest),
            one,
            two,
        }
    }

    /// Children as scheduled, including any padding sequence.
    pub fn children(&self) -> (&dyn Action, &dyn Action) {
        (self.one.as_ref(), self.two.as_ref())
    }

    /// Each (padded) child reversed, still in parallel. Padding that trailed a
    /// short child now leads it, so the pair mirrors the forward timeline.
    pub fn reverse(&self) -> Result<Spawn, ActionError> {
        Ok(Spawn::new(
            self.one.reverse_action()?,
            self.two.reverse_action()?,
        ))
    }
}

/// Run any number of actions in parallel, folded into nested pairs.
pub fn spawn(actions: Vec<Box<dyn Action>>) -> Result<Box<dyn Action>, ActionError> {
    let mut iter = actions.into_iter();
    let mut acc = iter.next().ok_or(ActionError::EmptyActionList {
        combinator: "spawn",
    })?;
    for action in iter {
        acc = Box::new(Spawn::new(acc, action));
    }
    Ok(acc)
}

impl Action for Spawn {
    interval_accessors!();

    fn name(&self) -> &'static str {
        "spawn"
    }

    fn requirements(&self) -> Capabilities {
        self.one.requirements() | self.two.requirements()
    }

    fn start(&mut self, target: &mut dyn Target) {
        self.interval.reset();
        self.one.start(target);
        self.two.start(target);
    }

    fn stop(&mut self, target: &mut dyn Target) {
        self.one.stop(target);
        self.two.stop(target);
    }

    fn update(&mut self, t: f32, target: &mut dyn Target) {
        self.one.update(t, target);
        self.two.update(t, target);
    }

    fn reverse_action(&self) -> Result<Box<dyn Action>, ActionError> {
        Ok(Box::new(self.reverse()?))
    }
}
