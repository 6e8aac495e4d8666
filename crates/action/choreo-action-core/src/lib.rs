//! Choreo action core (engine-agnostic)
//!
//! Composable, time-based actions that drive properties of a target over a
//! duration: primitive interpolators (rotate, move, jump, bezier, scale,
//! blink, fade, tint, delay, frame animation) and combinators (sequence,
//! repeat, spawn, reverse-time). Every action can be duplicated, and the
//! reversible ones produce their semantic inverse.
//!
//! Drivers call `start(target)` once, `step(dt, target)` every frame until
//! `is_done()`, then `stop(target)`. `ActionRunner` is a ready-made driver.

pub mod action;
pub mod combinators;
pub mod config;
pub mod definition;
pub mod error;
pub mod frames;
pub mod ids;
pub mod interp;
pub mod outputs;
pub mod primitives;
pub mod runner;
pub mod target;
pub mod value;

// Re-exports for hosts
pub use action::{Action, ActionExt, Interval, Reversible, MIN_DURATION};
pub use combinators::{sequence, spawn, Repeat, ReverseTime, Sequence, Spawn};
pub use config::RunnerConfig;
pub use definition::{parse_action_json, ActionDef};
pub use error::ActionError;
pub use frames::{AnimationClip, SpriteFrame};
pub use ids::RunId;
pub use outputs::{ActionEvent, Outputs};
pub use primitives::{
    Animate, BezierBy, BezierConfig, BezierTo, Blink, DelayTime, FadeIn, FadeOut, FadeTo, JumpBy,
    JumpTo, MoveBy, MoveTo, RotateBy, RotateTo, ScaleBy, ScaleTo, TintBy, TintTo,
};
pub use runner::{ActionRunner, TargetResolver};
pub use target::{
    check_capabilities, Capabilities, FrameDisplay, Positionable, Rotatable, Scalable, Target,
    Tintable, Visibility,
};
pub use value::{Color3, Vec2};
