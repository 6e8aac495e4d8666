//! Interpolation helpers shared by the primitive actions.
//!
//! Everything here is pure math over normalized progress `t` in [0,1].

pub mod functions;

pub use functions::{bezier_at, channel_lerp, channel_offset, jump_arc, lerp_f32, lerp_vec2};
