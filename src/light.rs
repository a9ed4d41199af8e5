//! Phong lighting for a single point light.

use crate::math::pow16;
use crate::math::vec3::Vec3;

/// A point light with separate ambient, diffuse and specular strengths.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub ambient: f32,
    pub diffuse: f32,
    pub specular: f32,
}

/// Scalar reflectance of a surface for each lighting term.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub ambient: f32,
    pub diffuse: f32,
    pub specular: f32,
}

impl PointLight {
    /// Light intensity reaching `eye` from the surface point `hit` with unit `normal`.
    ///
    /// `ambient + diffuse * dot(l, n) + specular * dot(r, v)^16`
    ///
    /// The diffuse dot product is deliberately not clamped: surfaces facing
    /// away from the light come out darker than the ambient level, and may go
    /// negative. Conventional Phong would clamp at zero; doing so here would
    /// change the rendered output. The specular term has no clamp either, but
    /// the even exponent keeps it non-negative.
    pub fn intensity(&self, material: &Material, hit: Vec3, normal: Vec3, eye: Vec3) -> f32 {
        let to_light = (self.position - hit).normalize();
        let reflection = -to_light.reflect(normal);
        let to_eye = (eye - hit).normalize();

        let ambient = self.ambient * material.ambient;
        let diffuse = material.diffuse * to_light.dot(normal) * self.diffuse;
        let specular = material.specular * pow16(reflection.dot(to_eye)) * self.specular;

        ambient + diffuse + specular
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const MATERIAL: Material = Material {
        ambient: 0.25,
        diffuse: 0.5,
        specular: 0.75,
    };

    fn light_at(position: Vec3) -> PointLight {
        PointLight {
            position,
            ambient: 1.0,
            diffuse: 1.0,
            specular: 1.0,
        }
    }

    #[test]
    fn test_light_and_eye_along_normal() {
        // Mirror direction points straight back at the eye: full specular
        let light = light_at(Vec3::new(0.0, 0.0, -10.0));
        let eye = Vec3::new(0.0, 0.0, -5.0);
        let intensity = light.intensity(&MATERIAL, Vec3::ZERO, Vec3::BACK, eye);
        assert_relative_eq!(intensity, 0.25 + 0.5 + 0.75);
    }

    #[test]
    fn test_grazing_light_has_no_diffuse() {
        let light = light_at(Vec3::new(10.0, 0.0, 0.0));
        let eye = Vec3::new(0.0, 0.0, -5.0);
        let intensity = light.intensity(&MATERIAL, Vec3::ZERO, Vec3::BACK, eye);
        // dot(l, n) = 0 and the reflection runs along +X, perpendicular to the eye
        assert_relative_eq!(intensity, 0.25, epsilon = 1e-6);
    }

    #[test]
    fn test_back_facing_light_subtracts_from_ambient() {
        let light = light_at(Vec3::new(0.0, 0.0, 10.0));
        let eye = Vec3::new(0.0, 0.0, -5.0);
        let intensity = light.intensity(&MATERIAL, Vec3::ZERO, Vec3::BACK, eye);
        // Diffuse contributes -0.5. The reflection points away from the eye,
        // dot = -1, and (-1)^16 = 1 keeps the full specular.
        assert_relative_eq!(intensity, 0.25 - 0.5 + 0.75);
    }

    #[test]
    fn test_ambient_scales_by_both_factors() {
        let light = PointLight {
            position: Vec3::new(10.0, 0.0, 0.0),
            ambient: 0.5,
            diffuse: 0.0,
            specular: 0.0,
        };
        let intensity = light.intensity(&MATERIAL, Vec3::ZERO, Vec3::BACK, Vec3::BACK);
        assert_relative_eq!(intensity, 0.125);
    }
}
