//! Sprite frames and animation clips consumed by `Animate`.
//!
//! Clips are read-only to actions; reversal builds a new clip instead of
//! mutating the original.

use serde::{Deserialize, Serialize};

use crate::value::Vec2;

/// One displayable frame: a rect within a texture plus a draw offset.
/// Equality is structural; two frames with the same texture/rect/offset are
/// considered the same displayed frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpriteFrame {
    pub texture: String,
    /// Texture-space rect (x, y, w, h) in pixels.
    pub rect: [f32; 4],
    #[serde(default)]
    pub offset: Vec2,
}

impl SpriteFrame {
    pub fn new(texture: impl Into<String>, rect: [f32; 4]) -> Self {
        Self {
            texture: texture.into(),
            rect,
            offset: Vec2::ZERO,
        }
    }
}

/// Ordered frames with a fixed per-frame delay (seconds).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnimationClip {
    pub name: String,
    pub delay: f32,
    pub frames: Vec<SpriteFrame>,
}

impl AnimationClip {
    pub fn new(name: impl Into<String>, delay: f32, frames: Vec<SpriteFrame>) -> Self {
        Self {
            name: name.into(),
            delay,
            frames,
        }
    }

    /// Playback length at the clip's own pace: frame count x delay.
    pub fn natural_duration(&self) -> f32 {
        self.frames.len() as f32 * self.delay
    }

    /// New clip with the same name and delay and the frames in reverse order.
    pub fn reversed(&self) -> AnimationClip {
        AnimationClip {
            name: self.name.clone(),
            delay: self.delay,
            frames: self.frames.iter().rev().cloned().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
