//! Render settings loaded from TOML.
//!
//! Every key is optional. A missing `[scene]` table keeps [`Scene::DEFAULT`],
//! so a file that only sets uniforms renders exactly what the built-in
//! constants describe.
//!
//! ```toml
//! width = 256
//! height = 256
//!
//! [uniforms]
//! viewport_origin = [0.0, 0.0]
//! rotation = [0.0, 0.5, 0.0]
//! color_a = [0.9, 0.1, 0.1, 1.0]
//! color_b = [1.0, 1.0, 1.0, 1.0]
//!
//! [scene.light]
//! position = [0.0, 0.0, -384.0]
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::light::{Material, PointLight};
use crate::render::Renderer;
use crate::scene::{Scene, SUBSCREEN_SIZE};
use crate::shader::{CheckerSphereShader, Uniforms};

/// Everything a host needs to render one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub uniforms: Uniforms,
    pub scene: Scene,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: SUBSCREEN_SIZE as u32,
            height: SUBSCREEN_SIZE as u32,
            uniforms: Uniforms::default(),
            scene: Scene::DEFAULT,
        }
    }
}

impl RenderConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(text)?;
        Ok(file.into())
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(
            path = %path.display(),
            width = config.width,
            height = config.height,
            "loaded render config"
        );
        Ok(config)
    }

    /// Shader for this config's uniforms and scene.
    pub fn shader(&self) -> CheckerSphereShader {
        CheckerSphereShader::with_scene(&self.scene, self.uniforms)
    }

    /// Empty renderer sized to this config's frame.
    pub fn renderer(&self) -> Result<Renderer> {
        Renderer::new(self.width, self.height)
    }
}

// On-disk layout. Vectors are plain arrays and converted afterwards.

#[derive(Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    width: u32,
    height: u32,
    uniforms: UniformsFile,
    scene: SceneFile,
}

#[derive(Deserialize)]
#[serde(default, deny_unknown_fields)]
struct UniformsFile {
    viewport_origin: [f32; 2],
    rotation: [f32; 3],
    color_a: [f32; 4],
    color_b: [f32; 4],
}

#[derive(Deserialize)]
#[serde(default, deny_unknown_fields)]
struct SceneFile {
    camera: [f32; 3],
    sphere_radius: f32,
    sphere_half_extent: f32,
    light: LightFile,
    material: MaterialFile,
}

#[derive(Deserialize)]
#[serde(default, deny_unknown_fields)]
struct LightFile {
    position: [f32; 3],
    ambient: f32,
    diffuse: f32,
    specular: f32,
}

#[derive(Deserialize)]
#[serde(default, deny_unknown_fields)]
struct MaterialFile {
    ambient: f32,
    diffuse: f32,
    specular: f32,
}

impl Default for ConfigFile {
    fn default() -> Self {
        let config = RenderConfig::default();
        Self {
            width: config.width,
            height: config.height,
            uniforms: UniformsFile::default(),
            scene: SceneFile::default(),
        }
    }
}

impl Default for UniformsFile {
    fn default() -> Self {
        let u = Uniforms::default();
        Self {
            viewport_origin: [u.viewport_origin.x, u.viewport_origin.y],
            rotation: [u.rotation.x, u.rotation.y, u.rotation.z],
            color_a: u.color_a.to_array(),
            color_b: u.color_b.to_array(),
        }
    }
}

impl Default for SceneFile {
    fn default() -> Self {
        let s = Scene::DEFAULT;
        Self {
            camera: [s.camera.x, s.camera.y, s.camera.z],
            sphere_radius: s.sphere_radius,
            sphere_half_extent: s.sphere_half_extent,
            light: LightFile::default(),
            material: MaterialFile::default(),
        }
    }
}

impl Default for LightFile {
    fn default() -> Self {
        let l = Scene::DEFAULT.light;
        Self {
            position: [l.position.x, l.position.y, l.position.z],
            ambient: l.ambient,
            diffuse: l.diffuse,
            specular: l.specular,
        }
    }
}

impl Default for MaterialFile {
    fn default() -> Self {
        let m = Scene::DEFAULT.material;
        Self {
            ambient: m.ambient,
            diffuse: m.diffuse,
            specular: m.specular,
        }
    }
}

impl From<ConfigFile> for RenderConfig {
    fn from(file: ConfigFile) -> Self {
        let u = file.uniforms;
        let s = file.scene;
        Self {
            width: file.width,
            height: file.height,
            uniforms: Uniforms {
                viewport_origin: u.viewport_origin.into(),
                rotation: u.rotation.into(),
                color_a: u.color_a.into(),
                color_b: u.color_b.into(),
            },
            scene: Scene {
                camera: s.camera.into(),
                sphere_radius: s.sphere_radius,
                sphere_half_extent: s.sphere_half_extent,
                light: PointLight {
                    position: s.light.position.into(),
                    ambient: s.light.ambient,
                    diffuse: s.light.diffuse,
                    specular: s.light.specular,
                },
                material: Material {
                    ambient: s.material.ambient,
                    diffuse: s.material.diffuse,
                    specular: s.material.specular,
                },
            },
        }
    }
}
