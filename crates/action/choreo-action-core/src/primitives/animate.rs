use crate::action::{interval_accessors, Action, Interval, Reversible};
use crate::error::ActionError;
use crate::frames::{AnimationClip, SpriteFrame};
use crate::target::{Capabilities, Target};

/// Play an animation clip by swapping the target's displayed frame.
///
/// With `restore_original_frame`, the frame shown at `start` is put back on
/// `stop`, whether the clip finished or was cancelled.
#[derive(Clone, Debug)]
pub struct Animate {
    interval: Interval,
    clip: AnimationClip,
    restore_original_frame: bool,
    original_frame: Option<SpriteFrame>,
}

impl Animate {
    /// Play at the clip's own pace (frame count x delay).
    pub fn new(clip: AnimationClip, restore_original_frame: bool) -> Result<Self, ActionError> {
        let duration = clip.natural_duration();
        Self::with_duration(duration, clip, restore_original_frame)
    }

    /// Stretch or squeeze the clip over an explicit duration.
    pub fn with_duration(
        duration: f32,
        clip: AnimationClip,
        restore_original_frame: bool,
    ) -> Result<Self, ActionError> {
        if clip.is_empty() {
            return Err(ActionError::EmptyAnimation { name: clip.name });
        }
        Ok(Self {
            interval: Interval::new(duration),
            clip,
            restore_original_frame,
            original_frame: None,
        })
    }

    pub fn clip(&self) -> &AnimationClip {
        &self.clip
    }

    pub fn restores_original_frame(&self) -> bool {
        self.restore_original_frame
    }

    /// Frame index for progress `t`, clamped to the last frame.
    pub fn frame_index(&self, t: f32) -> usize {
        let count = self.clip.frames.len();
        ((t * count as f32) as usize).min(count - 1)
    }
}

impl Action for Animate {
    interval_accessors!();

    fn name(&self) -> &'static str {
        "animate"
    }

    fn requirements(&self) -> Capabilities {
        Capabilities::FRAME
    }

    fn start(&mut self, target: &mut dyn Target) {
        self.interval.reset();
        self.original_frame = None;
        if self.restore_original_frame {
            self.original_frame = target.frame_display().and_then(|node| node.displayed_frame());
        }
    }

    fn update(&mut self, t: f32, target: &mut dyn Target) {
        let frame = &self.clip.frames[self.frame_index(t)];
        if let Some(node) = target.frame_display() {
            if !node.is_frame_displayed(frame) {
                node.set_displayed_frame(frame);
            }
        }
    }

    fn stop(&mut self, target: &mut dyn Target) {
        // take() so a second stop cannot clobber a later action's frame
        if let Some(frame) = self.original_frame.take() {
            if let Some(node) = target.frame_display() {
                node.set_displayed_frame(&frame);
            }
        }
    }

    fn reverse_action(&self) -> Result<Box<dyn Action>, ActionError> {
        Ok(Box::new(self.reverse()))
    }
}

impl Reversible for Animate {
    type Reversed = Animate;

    /// Frames in reverse order (cloned), same delay, duration and restore flag.
    fn reverse(&self) -> Animate {
        Animate {
            interval: Interval::new(self.duration()),
            clip: self.clip.reversed(),
            restore_original_frame: self.restore_original_frame,
            original_frame: None,
        }
    }
}
