//! Conversions between float RGBA colors and packed 8-bit pixels.
//!
//! The shader works in unclamped floats. Clamping to `[0, 1]` happens here,
//! at the point where a host turns a color into something displayable.

use crate::math::vec4::Vec4;

/// Packed ARGB8888 transparent black.
pub const TRANSPARENT: u32 = 0x0000_0000;

#[inline]
fn to_channel(value: f32) -> u8 {
    // NaN clamps to NaN, and `as u8` saturates NaN to 0
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Clamp a float color into `[0, 1]` and quantize to RGBA bytes.
#[inline]
pub fn to_rgba8(color: Vec4) -> [u8; 4] {
    [
        to_channel(color.x),
        to_channel(color.y),
        to_channel(color.z),
        to_channel(color.w),
    ]
}

/// Pack a float color as ARGB8888 (alpha in the high byte).
#[inline]
pub fn pack_color(color: Vec4) -> u32 {
    let [r, g, b, a] = to_rgba8(color);
    ((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

/// Unpack an ARGB8888 pixel into a float color in `[0, 1]`.
#[inline]
pub fn unpack_color(color: u32) -> Vec4 {
    let a = ((color >> 24) & 0xFF) as f32 / 255.0;
    let r = ((color >> 16) & 0xFF) as f32 / 255.0;
    let g = ((color >> 8) & 0xFF) as f32 / 255.0;
    let b = (color & 0xFF) as f32 / 255.0;
    Vec4::new(r, g, b, a)
}
