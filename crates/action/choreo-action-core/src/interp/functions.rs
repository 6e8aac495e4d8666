//! Interpolation helpers:
//! - lerp_f32 / lerp_vec2 (linear)
//! - bezier_at (cubic Bernstein basis, one axis)
//! - jump_arc (repeated parabolic bounce)
//! - channel_lerp / channel_offset (8-bit color channels)

use crate::value::Vec2;

/// Linear interpolation of scalars.
#[inline]
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[inline]
pub fn lerp_vec2(a: Vec2, b: Vec2, t: f32) -> Vec2 {
    Vec2::new(lerp_f32(a.x, b.x, t), lerp_f32(a.y, b.y, t))
}

/// Cubic Bezier basis on a single axis:
/// (1-t)^3 a + 3t(1-t)^2 b + 3t^2(1-t) c + t^3 d
#[inline]
pub fn bezier_at(a: f32, b: f32, c: f32, d: f32, t: f32) -> f32 {
    let u = 1.0 - t;
    u * u * u * a + 3.0 * t * u * u * b + 3.0 * t * t * u * c + t * t * t * d
}

/// Height of `jumps` symmetric parabolic bounces over t in [0,1].
/// Zero at every bounce boundary, `height` at each bounce midpoint.
#[inline]
pub fn jump_arc(height: f32, jumps: u32, t: f32) -> f32 {
    let frac = (t * jumps as f32) % 1.0;
    height * 4.0 * frac * (1.0 - frac)
}

/// Interpolate an 8-bit channel toward `to`. Float-to-u8 conversion truncates
/// toward zero and saturates at the channel bounds.
#[inline]
pub fn channel_lerp(from: u8, to: u8, t: f32) -> u8 {
    lerp_f32(from as f32, to as f32, t) as u8
}

/// Offset an 8-bit channel by a signed delta scaled by `t`, saturating.
#[inline]
pub fn channel_offset(from: i16, delta: i16, t: f32) -> u8 {
    (from as f32 + delta as f32 * t) as u8
}
