//! Small fixed-size linear algebra used by the shading kernel.

pub mod mat3;
pub mod vec2;
pub mod vec3;
pub mod vec4;

/// Raise `x` to the 16th power by squaring: `x^2`, then three more squarings.
///
/// The result is never negative, even for a negative base.
#[inline]
pub fn pow16(x: f32) -> f32 {
    let x2 = x * x;
    let x4 = x2 * x2;
    let x8 = x4 * x4;
    x8 * x8
}
