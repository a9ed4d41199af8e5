//! The fixed scene: one camera, one sphere, one point light.
//!
//! Every quantity here is a named constant so that shading stays
//! bit-reproducible. The only per-frame input that touches the scene is the
//! viewport origin, which translates the sphere center.

use crate::light::{Material, PointLight};
use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;

/// Side length of the square sub-screen the sphere is centered in.
pub const SUBSCREEN_SIZE: f32 = 256.0;

/// Offset from the viewport origin to the sphere center on both axes.
pub const SPHERE_HALF_EXTENT: f32 = SUBSCREEN_SIZE / 2.0;

pub const SPHERE_RADIUS: f32 = 96.0;

/// Camera sits in front of the sub-screen center, looking down +Z.
pub const CAMERA_POSITION: Vec3 = Vec3::new(SPHERE_HALF_EXTENT, SPHERE_HALF_EXTENT, -512.0);

pub const LIGHT_POSITION: Vec3 = Vec3::new(0.0, 0.0, -384.0);

pub const LIGHT: PointLight = PointLight {
    position: LIGHT_POSITION,
    ambient: 1.0,
    diffuse: 1.0,
    specular: 1.0,
};

pub const MATERIAL: Material = Material {
    ambient: 0.3,
    diffuse: 0.7,
    specular: 0.5,
};

/// Exponent of the specular lobe. Fixed; see [`crate::math::pow16`].
pub const SPECULAR_EXPONENT: u32 = 16;

/// A ray `origin + direction * t`. `direction` is unit length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Ray from `camera` through `point` on the z = 0 plane.
    pub fn through_point(camera: Vec3, point: Vec2) -> Self {
        let target = Vec3::from_vec2(point, 0.0);
        Self::new(camera, (target - camera).normalize())
    }

    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Nearest non-negative parametric distance along `ray`, or `None` on a miss.
    ///
    /// Geometric line/sphere test:
    /// - the center behind the ray origin (`t_ca < 0`) is a miss
    /// - a center farther than `radius` from the line is a miss
    /// - a center exactly `radius` away is a tangent hit with one root
    ///
    /// When the ray starts inside the sphere the near root is negative and the
    /// far root is returned instead.
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        let to_center = self.center - ray.origin;
        let t_ca = to_center.dot(ray.direction);
        if t_ca < 0.0 {
            return None;
        }

        let radius2 = self.radius * self.radius;
        let d2 = to_center.magnitude_squared() - t_ca * t_ca;
        if d2 > radius2 {
            return None;
        }

        let t_hc = (radius2 - d2).sqrt();
        let (t0, t1) = (t_ca - t_hc, t_ca + t_hc);

        if t0 >= 0.0 {
            Some(t0)
        } else if t1 >= 0.0 {
            Some(t1)
        } else {
            None
        }
    }

    /// Outward unit normal at a point on the surface.
    ///
    /// Only a zero-radius sphere can make `point - center` vanish; the result
    /// is then NaN and is not guarded against.
    #[inline]
    pub fn normal_at(&self, point: Vec3) -> Vec3 {
        (point - self.center).normalize()
    }
}

/// All fixed scene parameters bundled together.
///
/// [`Scene::DEFAULT`] is what the kernel uses. Hosts that want a different
/// camera or light can build their own and hand it to
/// [`CheckerSphereShader::with_scene`](crate::shader::CheckerSphereShader::with_scene).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scene {
    pub camera: Vec3,
    pub sphere_radius: f32,
    pub sphere_half_extent: f32,
    pub light: PointLight,
    pub material: Material,
}

impl Scene {
    pub const DEFAULT: Self = Self {
        camera: CAMERA_POSITION,
        sphere_radius: SPHERE_RADIUS,
        sphere_half_extent: SPHERE_HALF_EXTENT,
        light: LIGHT,
        material: MATERIAL,
    };

    /// The sphere for a frame whose viewport starts at `viewport_origin`.
    pub fn sphere(&self, viewport_origin: Vec2) -> Sphere {
        let center = viewport_origin + Vec2::splat(self.sphere_half_extent);
        Sphere::new(Vec3::from_vec2(center, 0.0), self.sphere_radius)
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::DEFAULT
    }
}
