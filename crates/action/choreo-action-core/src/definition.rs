//! Serializable action definitions.
//!
//! A choreography can be authored as JSON and built into a live action
//! graph. The enum is internally tagged by `"type"`:
//!
//! ```json
//! { "type": "sequence", "actions": [
//!     { "type": "move_by", "duration": 1.0, "delta": { "x": 40, "y": 0 } },
//!     { "type": "reverse", "action": { "type": "move_by", "duration": 1.0, "delta": { "x": 40, "y": 0 } } }
//! ] }
//! ```
//!
//! `reverse` builds the semantic reversal of its inner definition and fails
//! for kinds without one; `reverse_time` plays the inner action backwards.

use serde::{Deserialize, Serialize};

use crate::action::{Action, ActionExt};
use crate::combinators::{sequence, spawn, Repeat, ReverseTime};
use crate::error::ActionError;
use crate::frames::AnimationClip;
use crate::primitives::{
    Animate, BezierBy, BezierConfig, BezierTo, Blink, DelayTime, FadeIn, FadeOut, FadeTo, JumpBy,
    JumpTo, MoveBy, MoveTo, RotateBy, RotateTo, ScaleBy, ScaleTo, TintBy, TintTo,
};
use crate::value::{Color3, Vec2};

fn default_true() -> bool {
    true
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActionDef {
    RotateTo {
        duration: f32,
        angle: f32,
    },
    RotateBy {
        duration: f32,
        angle: f32,
    },
    MoveTo {
        duration: f32,
        position: Vec2,
    },
    MoveBy {
        duration: f32,
        delta: Vec2,
    },
    JumpTo {
        duration: f32,
        position: Vec2,
        height: f32,
        jumps: u32,
    },
    JumpBy {
        duration: f32,
        delta: Vec2,
        height: f32,
        jumps: u32,
    },
    BezierTo {
        duration: f32,
        config: BezierConfig,
    },
    BezierBy {
        duration: f32,
        config: BezierConfig,
    },
    ScaleTo {
        duration: f32,
        scale_x: f32,
        scale_y: f32,
    },
    ScaleBy {
        duration: f32,
        scale_x: f32,
        scale_y: f32,
    },
    Blink {
        duration: f32,
        blinks: u32,
    },
    FadeIn {
        duration: f32,
    },
    FadeOut {
        duration: f32,
    },
    FadeTo {
        duration: f32,
        opacity: u8,
    },
    TintTo {
        duration: f32,
        color: Color3,
    },
    TintBy {
        duration: f32,
        delta: [i16; 3],
    },
    DelayTime {
        duration: f32,
    },
    Animate {
        /// Defaults to the clip's natural duration.
        #[serde(default)]
        duration: Option<f32>,
        clip: AnimationClip,
        #[serde(default = "default_true")]
        restore_original_frame: bool,
    },
    Sequence {
        actions: Vec<ActionDef>,
    },
    Spawn {
        actions: Vec<ActionDef>,
    },
    Repeat {
        times: u32,
        action: Box<ActionDef>,
    },
    ReverseTime {
        action: Box<ActionDef>,
    },
    Reverse {
        action: Box<ActionDef>,
    },
}

fn checked_duration(duration: f32) -> Result<f32, ActionError> {
    if duration.is_finite() && duration >= 0.0 {
        Ok(duration)
    } else {
        Err(ActionError::InvalidDefinition(format!(
            "duration must be finite and non-negative, got {duration}"
        )))
    }
}

impl ActionDef {
    /// Build a fresh, unstarted action graph.
    pub fn build(&self) -> Result<Box<dyn Action>, ActionError> {
        let action = match self {
            ActionDef::RotateTo { duration, angle } => {
                RotateTo::new(checked_duration(*duration)?, *angle).boxed()
            }
            ActionDef::RotateBy { duration, angle } => {
                RotateBy::new(checked_duration(*duration)?, *angle).boxed()
            }
            ActionDef::MoveTo { duration, position } => {
                MoveTo::new(checked_duration(*duration)?, *position).boxed()
            }
            ActionDef::MoveBy { duration, delta } => {
                MoveBy::new(checked_duration(*duration)?, *delta).boxed()
            }
            ActionDef::JumpTo {
                duration,
                position,
                height,
                jumps,
            } => JumpTo::new(checked_duration(*duration)?, *position, *height, *jumps).boxed(),
            ActionDef::JumpBy {
                duration,
                delta,
                height,
                jumps,
            } => JumpBy::new(checked_duration(*duration)?, *delta, *height, *jumps).boxed(),
            ActionDef::BezierTo { duration, config } => {
                BezierTo::new(checked_duration(*duration)?, *config).boxed()
            }
            ActionDef::BezierBy { duration, config } => {
                BezierBy::new(checked_duration(*duration)?, *config).boxed()
            }
            ActionDef::ScaleTo {
                duration,
                scale_x,
                scale_y,
            } => ScaleTo::new(checked_duration(*duration)?, *scale_x, *scale_y).boxed(),
            ActionDef::ScaleBy {
                duration,
                scale_x,
                scale_y,
            } => ScaleBy::new(checked_duration(*duration)?, *scale_x, *scale_y).boxed(),
            ActionDef::Blink { duration, blinks } => {
                Blink::new(checked_duration(*duration)?, *blinks)?.boxed()
            }
            ActionDef::FadeIn { duration } => FadeIn::new(checked_duration(*duration)?).boxed(),
            ActionDef::FadeOut { duration } => FadeOut::new(checked_duration(*duration)?).boxed(),
            ActionDef::FadeTo { duration, opacity } => {
                FadeTo::new(checked_duration(*duration)?, *opacity).boxed()
            }
            ActionDef::TintTo { duration, color } => {
                TintTo::new(checked_duration(*duration)?, *color).boxed()
            }
            ActionDef::TintBy { duration, delta } => {
                let [dr, dg, db] = *delta;
                TintBy::new(checked_duration(*duration)?, dr, dg, db).boxed()
            }
            ActionDef::DelayTime { duration } => {
                DelayTime::new(checked_duration(*duration)?).boxed()
            }
            ActionDef::Animate {
                duration,
                clip,
                restore_original_frame,
            } => match duration {
                Some(d) => Animate::with_duration(
                    checked_duration(*d)?,
                    clip.clone(),
                    *restore_original_frame,
                )?
                .boxed(),
                None => Animate::new(clip.clone(), *restore_original_frame)?.boxed(),
            },
            ActionDef::Sequence { actions } => sequence(build_all(actions)?)?,
            ActionDef::Spawn { actions } => spawn(build_all(actions)?)?,
            ActionDef::Repeat { times, action } => Repeat::new(action.build()?, *times)?.boxed(),
            ActionDef::ReverseTime { action } => ReverseTime::new(action.build()?).boxed(),
            ActionDef::Reverse { action } => action.build()?.reverse_action()?,
        };
        Ok(action)
    }
}

fn build_all(defs: &[ActionDef]) -> Result<Vec<Box<dyn Action>>, ActionError> {
    defs.iter().map(ActionDef::build).collect()
}

/// Parse a JSON action definition and build it.
pub fn parse_action_json(s: &str) -> Result<Box<dyn Action>, ActionError> {
    let def: ActionDef = serde_json::from_str(s)?;
    def.build()
}
