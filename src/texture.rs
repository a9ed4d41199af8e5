//! Spherical checkerboard texturing: direction to UV, UV to tile color.

use std::f32::consts::PI;

use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;
use crate::math::vec4::Vec4;

/// Number of checker tiles across each UV axis.
pub const CHECKER_TILES: f32 = 12.0;

/// Map a unit direction to spherical texture coordinates.
///
/// - `u` is the longitude around the Y axis, `[0, CHECKER_TILES]`
/// - `v` is the angle down from +Y, `[0, CHECKER_TILES]`
///
/// At the poles `atan2(0, 0)` is 0, so every longitude collapses onto
/// `u = CHECKER_TILES / 2`. The result is defined, just stretched.
#[inline]
pub fn spherical_uv(direction: Vec3) -> Vec2 {
    let u = (1.0 + direction.z.atan2(direction.x) / PI) * 0.5 * CHECKER_TILES;
    let v = direction.y.clamp(-1.0, 1.0).acos() / PI * CHECKER_TILES;
    Vec2::new(u, v)
}

/// `true` when exactly one of the two tile indices is odd.
///
/// Each axis is `step(1, mod(value, 2))`: set when the value falls in the
/// second half of a two-tile period. Negative inputs wrap the same way.
#[inline]
pub fn checker_parity(uv: Vec2) -> bool {
    let odd_u = uv.x.rem_euclid(2.0) >= 1.0;
    let odd_v = uv.y.rem_euclid(2.0) >= 1.0;
    odd_u ^ odd_v
}

/// A procedural two-color checkerboard.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Checkerboard {
    pub color_a: Vec4,
    pub color_b: Vec4,
}

impl Checkerboard {
    pub fn new(color_a: Vec4, color_b: Vec4) -> Self {
        Self { color_a, color_b }
    }

    /// Sample the board. No filtering and no wrapping beyond the tile period.
    #[inline]
    pub fn sample(&self, uv: Vec2) -> Vec4 {
        if checker_parity(uv) {
            self.color_a
        } else {
            self.color_b
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const RED: Vec4 = Vec4::new(1.0, 0.0, 0.0, 1.0);
    const BLUE: Vec4 = Vec4::new(0.0, 0.0, 1.0, 0.5);

    #[test]
    fn test_uv_facing_negative_z() {
        let uv = spherical_uv(Vec3::BACK);
        assert_relative_eq!(uv.x, 3.0, epsilon = 1e-5);
        assert_relative_eq!(uv.y, 6.0, epsilon = 1e-5);
    }

    #[test]
    fn test_uv_at_north_pole() {
        let uv = spherical_uv(Vec3::UP);
        assert_relative_eq!(uv.x, 6.0);
        assert_eq!(uv.y, 0.0);
    }

    #[test]
    fn test_uv_clamps_overlong_y() {
        let uv = spherical_uv(Vec3::new(0.0, -1.0000001, 0.0));
        assert!(uv.y.is_finite());
        assert_relative_eq!(uv.y, CHECKER_TILES, epsilon = 1e-5);
    }

    #[test]
    fn test_parity_is_xor_of_axes() {
        assert!(!checker_parity(Vec2::new(0.5, 0.5)));
        assert!(checker_parity(Vec2::new(1.5, 0.5)));
        assert!(checker_parity(Vec2::new(0.5, 1.5)));
        assert!(!checker_parity(Vec2::new(1.5, 1.5)));
        assert!(!checker_parity(Vec2::new(2.5, 2.5)));
    }

    #[test]
    fn test_parity_wraps_negative_values() {
        // -0.5 lies in the second half of the [-2, 0) period
        assert!(checker_parity(Vec2::new(-0.5, 0.5)));
        assert!(!checker_parity(Vec2::new(-1.5, 0.5)));
    }

    #[test]
    fn test_sample_picks_color_a_on_odd_parity() {
        let board = Checkerboard::new(RED, BLUE);
        assert_eq!(board.sample(Vec2::new(1.5, 0.5)), RED);
        assert_eq!(board.sample(Vec2::new(0.5, 0.5)), BLUE);
    }

    #[test]
    fn test_swapping_colors_inverts_every_tile() {
        let board = Checkerboard::new(RED, BLUE);
        let swapped = Checkerboard::new(BLUE, RED);
        for i in 0..24 {
            let uv = Vec2::new(i as f32 * 0.5 + 0.25, i as f32 * 0.75 + 0.1);
            let a = board.sample(uv);
            let b = swapped.sample(uv);
            assert_ne!(a, b);
            assert!((a == RED && b == BLUE) || (a == BLUE && b == RED));
        }
    }
}
