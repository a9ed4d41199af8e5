//! The checkered-sphere pixel shader.
//!
//! This module is the whole shading kernel. A host calls [`PixelShader::shade`]
//! once per pixel; nothing is shared or mutated between calls, so pixels can be
//! shaded in any order, from any number of threads.
//!
//! # Pipeline
//!
//! 1. Build a ray from the fixed camera through `(pixel + viewport_origin, 0)`
//! 2. Intersect the sphere centered at `viewport_origin + (128, 128)`
//! 3. Take the outward normal at the hit point
//! 4. Rotate the normal into texture space
//! 5. Map it to spherical UV and pick a checker color
//! 6. Scale the color by the Phong intensity
//!
//! A miss stops after step 2 and returns transparent black.
//!
//! # Rotating the texture instead of the sphere
//!
//! A sphere looks the same under any rotation about its center, so spinning
//! it only changes which part of the texture lands on each surface point.
//! Rotating the normal before the UV lookup gives exactly that result without
//! touching the geometry. This only holds for a sphere; any other shape needs
//! its geometry rotated for real.

use crate::light::{Material, PointLight};
use crate::math::mat3::Mat3;
use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;
use crate::math::vec4::Vec4;
use crate::scene::{Ray, Scene, Sphere};
use crate::texture::{checker_parity, spherical_uv, Checkerboard};

/// Color of every pixel whose ray misses the sphere.
pub const TRANSPARENT: Vec4 = Vec4::ZERO;

/// Trait for per-pixel shading computations.
///
/// Implementors must be pure: the same pixel always produces the same color.
pub trait PixelShader {
    /// Compute the RGBA color of the pixel at `pixel`.
    ///
    /// Components are not clamped and may leave `[0, 1]`; mapping to a
    /// displayable range is up to the caller.
    fn shade(&self, pixel: Vec2) -> Vec4;
}

/// Per-frame inputs of the kernel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Uniforms {
    /// Offset added to every pixel coordinate; also moves the sphere.
    pub viewport_origin: Vec2,
    /// Euler angles in radians, applied to the texture as `Rz * Rx * Ry`.
    pub rotation: Vec3,
    /// Tile color where the checker parity is odd.
    pub color_a: Vec4,
    /// Tile color where the checker parity is even.
    pub color_b: Vec4,
}

impl Default for Uniforms {
    fn default() -> Self {
        Self {
            viewport_origin: Vec2::ZERO,
            rotation: Vec3::ZERO,
            color_a: Vec4::ONE,
            color_b: Vec4::new(0.0, 0.0, 0.0, 1.0),
        }
    }
}

/// Everything computed for a pixel that hits the sphere.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceSample {
    /// Distance along the unit-length view ray.
    pub t: f32,
    pub position: Vec3,
    /// Outward surface normal in world space.
    pub normal: Vec3,
    /// `normal` after the texture rotation.
    pub tex_normal: Vec3,
    pub uv: Vec2,
    /// `true` selects `color_a`.
    pub parity: bool,
    pub intensity: f32,
}

/// Ray-traced sphere with a rotating checkerboard texture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CheckerSphereShader {
    viewport_origin: Vec2,
    camera: Vec3,
    sphere: Sphere,
    light: PointLight,
    material: Material,
    texture_rotation: Mat3,
    board: Checkerboard,
}

impl CheckerSphereShader {
    /// Shader over the fixed default scene.
    pub fn new(uniforms: Uniforms) -> Self {
        Self::with_scene(&Scene::DEFAULT, uniforms)
    }

    /// Shader over a caller-supplied scene.
    ///
    /// The rotation matrix is built once here rather than once per pixel.
    pub fn with_scene(scene: &Scene, uniforms: Uniforms) -> Self {
        Self {
            viewport_origin: uniforms.viewport_origin,
            camera: scene.camera,
            sphere: scene.sphere(uniforms.viewport_origin),
            light: scene.light,
            material: scene.material,
            texture_rotation: Mat3::euler_zxy(uniforms.rotation),
            board: Checkerboard::new(uniforms.color_a, uniforms.color_b),
        }
    }

    pub fn sphere(&self) -> Sphere {
        self.sphere
    }

    pub fn camera(&self) -> Vec3 {
        self.camera
    }

    /// Trace the ray for a pixel in viewport-local coordinates.
    ///
    /// Returns `None` when the ray misses the sphere.
    pub fn trace(&self, pixel: Vec2) -> Option<SurfaceSample> {
        let world = pixel + self.viewport_origin;
        let ray = Ray::through_point(self.camera, world);
        let t = self.sphere.intersect(&ray)?;

        let position = ray.at(t);
        let normal = self.sphere.normal_at(position);
        let tex_normal = self.texture_rotation * normal;
        let uv = spherical_uv(tex_normal);
        let intensity = self
            .light
            .intensity(&self.material, position, normal, self.camera);

        Some(SurfaceSample {
            t,
            position,
            normal,
            tex_normal,
            uv,
            parity: checker_parity(uv),
            intensity,
        })
    }
}

impl PixelShader for CheckerSphereShader {
    #[inline]
    fn shade(&self, pixel: Vec2) -> Vec4 {
        match self.trace(pixel) {
            Some(sample) => self.board.sample(sample.uv).scale_rgb(sample.intensity),
            None => TRANSPARENT,
        }
    }
}

/// Shade one pixel of the default scene.
///
/// Convenience wrapper around [`CheckerSphereShader`] for hosts that call
/// the kernel with loose uniforms. Pure and deterministic. Inputs are not
/// validated: a NaN color comes back as a NaN color, and a NaN pixel or
/// origin fails every intersection test and comes back transparent.
pub fn evaluate(
    pixel: Vec2,
    viewport_origin: Vec2,
    rotation: Vec3,
    color_a: Vec4,
    color_b: Vec4,
) -> Vec4 {
    CheckerSphereShader::new(Uniforms {
        viewport_origin,
        rotation,
        color_a,
        color_b,
    })
    .shade(pixel)
}
