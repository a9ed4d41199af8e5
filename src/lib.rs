//! A CPU pixel shader that ray-traces a single checkered sphere.
//!
//! The core is a pure per-pixel function: given a pixel coordinate and a few
//! per-frame uniforms (viewport origin, texture rotation, two tile colors) it
//! intersects a fixed sphere, textures the hit with a rotated spherical
//! checkerboard and lights it with a single Phong point light. Everything
//! else in the crate exists to feed that function and consume its output.
//!
//! # Quick Start
//!
//! ```
//! use checkerball::prelude::*;
//!
//! # fn main() -> checkerball::Result<()> {
//! let shader = CheckerSphereShader::new(Uniforms {
//!     rotation: Vec3::new(0.0, 0.8, 0.0),
//!     ..Uniforms::default()
//! });
//! let mut renderer = Renderer::new(256, 256)?;
//! renderer.render(&shader);
//! renderer.save_png(std::env::temp_dir().join("checkerball-sphere.png"))?;
//! # Ok(())
//! # }
//! ```

// Public API - exposed to library consumers
pub mod colors;
pub mod config;
pub mod error;
pub mod light;
pub mod math;
pub mod render;
pub mod scene;
pub mod shader;
pub mod texture;

// Re-export commonly needed types at crate root for convenience
pub use config::RenderConfig;
pub use error::{Error, Result};
pub use render::Renderer;
pub use scene::Scene;
pub use shader::{evaluate, CheckerSphereShader, PixelShader, SurfaceSample, Uniforms};

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use checkerball::prelude::*;
///
/// # fn main() -> checkerball::Result<()> {
/// let config = RenderConfig::from_toml_str("width = 64\nheight = 64")?;
/// let mut renderer = config.renderer()?;
/// renderer.render(&config.shader());
///
/// // The sub-screen corner is off the sphere.
/// assert_eq!(renderer.pixel(0, 0), Some(Vec4::ZERO));
/// let corner = evaluate(Vec2::new(0.5, 0.5), Vec2::ZERO, Vec3::ZERO, Vec4::ONE, Vec4::ONE);
/// assert_eq!(corner, Vec4::ZERO);
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    // Shading
    pub use crate::shader::{evaluate, CheckerSphereShader, PixelShader, Uniforms};

    // Scene
    pub use crate::light::{Material, PointLight};
    pub use crate::scene::{Ray, Scene, Sphere};

    // Math
    pub use crate::math::mat3::Mat3;
    pub use crate::math::vec2::Vec2;
    pub use crate::math::vec3::Vec3;
    pub use crate::math::vec4::Vec4;

    // Rendering
    pub use crate::config::RenderConfig;
    pub use crate::render::{FrameBuffer, Renderer};
}
