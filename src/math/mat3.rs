//! 3x3 rotation matrix.
//!
//! # Convention
//! - Stored as `data[row][col]`
//! - Vectors are **column vectors** on the right: `Mat3 * Vec3`
//! - Transforms chain **right-to-left**: `A * B * v` applies B first, then A
//! - Rotations are right-handed: a positive angle turns counter-clockwise when
//!   looking down the axis towards the origin

use std::ops::Mul;

use super::vec3::Vec3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat3 {
    data: [[f32; 3]; 3],
}

impl Mat3 {
    pub const IDENTITY: Self = Self::new([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);

    pub const fn new(data: [[f32; 3]; 3]) -> Self {
        Mat3 { data }
    }

    pub fn identity() -> Self {
        Self::IDENTITY
    }

    /// Creates a rotation matrix around the X axis.
    pub fn rotation_x(angle: f32) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Mat3::new([[1.0, 0.0, 0.0], [0.0, c, -s], [0.0, s, c]])
    }

    /// Creates a rotation matrix around the Y axis.
    pub fn rotation_y(angle: f32) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Mat3::new([[c, 0.0, s], [0.0, 1.0, 0.0], [-s, 0.0, c]])
    }

    /// Creates a rotation matrix around the Z axis.
    pub fn rotation_z(angle: f32) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Mat3::new([[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Builds `Rz(r.z) * Rx(r.x) * Ry(r.y)` in closed form.
    ///
    /// Equal to `rotation_z(r.z) * rotation_x(r.x) * rotation_y(r.y)`.
    pub fn euler_zxy(rotation: Vec3) -> Self {
        let (sx, cx) = rotation.x.sin_cos();
        let (sy, cy) = rotation.y.sin_cos();
        let (sz, cz) = rotation.z.sin_cos();

        Mat3::new([
            [cz * cy - sz * sx * sy, -sz * cx, cz * sy + sz * sx * cy],
            [sz * cy + cz * sx * sy, cz * cx, sz * sy - cz * sx * cy],
            [-cx * sy, sx, cx * cy],
        ])
    }

    pub fn transpose(&self) -> Self {
        let m = &self.data;
        Mat3::new([
            [m[0][0], m[1][0], m[2][0]],
            [m[0][1], m[1][1], m[2][1]],
            [m[0][2], m[1][2], m[2][2]],
        ])
    }

    /// Access element at [row][col].
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[row][col]
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Matrix multiplication: Mat3 * Mat3.
impl Mul<Mat3> for Mat3 {
    type Output = Mat3;

    fn mul(self, rhs: Mat3) -> Self::Output {
        let mut result = [[0.0f32; 3]; 3];

        for (row, out) in result.iter_mut().enumerate() {
            for (col, cell) in out.iter_mut().enumerate() {
                *cell = self.data[row][0] * rhs.data[0][col]
                    + self.data[row][1] * rhs.data[1][col]
                    + self.data[row][2] * rhs.data[2][col];
            }
        }

        Mat3::new(result)
    }
}

/// Transform a direction: Mat3 * Vec3 (column vector).
impl Mul<Vec3> for Mat3 {
    type Output = Vec3;

    fn mul(self, v: Vec3) -> Self::Output {
        Vec3::new(
            self.data[0][0] * v.x + self.data[0][1] * v.y + self.data[0][2] * v.z,
            self.data[1][0] * v.x + self.data[1][1] * v.y + self.data[1][2] * v.z,
            self.data[2][0] * v.x + self.data[2][1] * v.y + self.data[2][2] * v.z,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    fn assert_mat_eq(a: Mat3, b: Mat3) {
        for row in 0..3 {
            for col in 0..3 {
                assert_relative_eq!(a.get(row, col), b.get(row, col), epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn test_zero_rotation_is_identity() {
        assert_eq!(Mat3::euler_zxy(Vec3::ZERO), Mat3::identity());
    }

    #[test]
    fn test_closed_form_matches_composed_rotations() {
        for r in [
            Vec3::new(0.3, -1.2, 2.5),
            Vec3::new(FRAC_PI_2, 0.0, 0.0),
            Vec3::new(-0.7, 0.4, -3.0),
        ] {
            let composed = Mat3::rotation_z(r.z) * Mat3::rotation_x(r.x) * Mat3::rotation_y(r.y);
            assert_mat_eq(Mat3::euler_zxy(r), composed);
        }
    }

    #[test]
    fn test_rotation_z_quarter_turn() {
        let v = Mat3::rotation_z(FRAC_PI_2) * Vec3::RIGHT;
        assert_relative_eq!(v.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(v.y, 1.0, epsilon = 1e-6);
        assert_relative_eq!(v.z, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_rotation_preserves_length() {
        let m = Mat3::euler_zxy(Vec3::new(1.1, 2.2, 3.3));
        let v = m * Vec3::new(0.0, 0.6, -0.8);
        assert_relative_eq!(v.magnitude(), 1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_transpose_inverts_rotation() {
        let m = Mat3::euler_zxy(Vec3::new(0.5, -0.25, 1.75));
        assert_mat_eq(m * m.transpose(), Mat3::identity());
    }
}
