//! Primitive interpolators: each captures a "from" value at start and writes
//! one target property as a function of progress.

pub mod animate;
pub mod bezier;
pub mod blink;
pub mod delay;
pub mod fade;
pub mod jump;
pub mod movement;
pub mod rotate;
pub mod scale;
pub mod tint;

pub use animate::Animate;
pub use bezier::{BezierBy, BezierConfig, BezierTo};
pub use blink::Blink;
pub use delay::DelayTime;
pub use fade::{FadeIn, FadeOut, FadeTo};
pub use jump::{JumpBy, JumpTo};
pub use movement::{MoveBy, MoveTo};
pub use rotate::{RotateBy, RotateTo};
pub use scale::{ScaleBy, ScaleTo};
pub use tint::{TintBy, TintTo};
