//! Host-side frame rendering.
//!
//! Provides the [`Renderer`] struct which owns a float RGBA color buffer,
//! runs a [`PixelShader`] over every pixel and converts the result for display
//! or export.

use std::path::Path;
use std::time::Instant;

use image::{ImageFormat, Rgba, RgbaImage};
use rayon::prelude::*;

use super::framebuffer::FrameBuffer;
use crate::colors;
use crate::error::{Error, Result};
use crate::math::vec2::Vec2;
use crate::math::vec4::Vec4;
use crate::shader::{PixelShader, TRANSPARENT};

/// Coordinate handed to the shader for the pixel at column `x`, row `y`.
///
/// Pixel centers sit at half-integer offsets, the way fragment coordinates do.
#[inline]
pub fn pixel_center(x: u32, y: u32) -> Vec2 {
    Vec2::new(x as f32 + 0.5, y as f32 + 0.5)
}

/// Largest frame, in pixels, a [`Renderer`] will allocate.
pub const MAX_PIXELS: usize = 1 << 28;

pub struct Renderer {
    color_buffer: Vec<Vec4>,
    width: u32,
    height: u32,
}

impl Renderer {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let len = check_dimensions(width, height)?;
        Ok(Self {
            color_buffer: vec![TRANSPARENT; len],
            width,
            height,
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        let len = check_dimensions(width, height)?;
        self.color_buffer = vec![TRANSPARENT; len];
        self.width = width;
        self.height = height;
        Ok(())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn clear(&mut self, color: Vec4) {
        self.color_buffer.fill(color);
    }

    /// Shade every pixel, spreading rows across the rayon thread pool.
    ///
    /// Each row is a disjoint slice of the buffer, and the shader only reads
    /// its own state, so no synchronization is involved.
    pub fn render<S: PixelShader + Sync>(&mut self, shader: &S) {
        let start = Instant::now();
        let width = self.width as usize;

        self.color_buffer
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, pixel) in row.iter_mut().enumerate() {
                    *pixel = shader.shade(pixel_center(x as u32, y as u32));
                }
            });

        tracing::debug!(
            width = self.width,
            height = self.height,
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            "rendered frame"
        );
    }

    /// Shade every pixel on the calling thread.
    ///
    /// Produces a buffer bit-identical to [`Renderer::render`].
    pub fn render_serial<S: PixelShader>(&mut self, shader: &S) {
        let (width, height) = (self.width, self.height);
        let mut fb = self.as_framebuffer();
        for y in 0..height {
            for x in 0..width {
                fb.set_pixel(x as i32, y as i32, shader.shade(pixel_center(x, y)));
            }
        }
    }

    /// Color at (x, y), or None if out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Vec4> {
        if x < self.width && y < self.height {
            Some(self.color_buffer[self.index(x, y)])
        } else {
            None
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Raw float colors, row-major.
    pub fn pixels(&self) -> &[Vec4] {
        &self.color_buffer
    }

    /// Get a mutable FrameBuffer view into the color buffer.
    pub fn as_framebuffer(&mut self) -> FrameBuffer<'_> {
        FrameBuffer::new(&mut self.color_buffer, self.width, self.height)
    }

    /// Clamp and pack the frame as ARGB8888, ready for a streaming texture.
    pub fn to_argb_buffer(&self) -> Vec<u32> {
        self.color_buffer
            .iter()
            .map(|&c| colors::pack_color(c))
            .collect()
    }

    /// Clamp and convert the frame to an 8-bit RGBA image.
    pub fn to_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width, self.height, |x, y| {
            Rgba(colors::to_rgba8(self.color_buffer[self.index(x, y)]))
        })
    }

    /// Write the frame to `path` as a PNG.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        self.to_image().save_with_format(path, ImageFormat::Png)?;
        tracing::info!(path = %path.display(), "saved frame");
        Ok(())
    }
}

/// Pixel count for a `width` x `height` frame.
///
/// Rejects empty frames and anything larger than [`MAX_PIXELS`].
fn check_dimensions(width: u32, height: u32) -> Result<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .filter(|&len| len > 0 && len <= MAX_PIXELS)
        .ok_or(Error::InvalidDimensions { width, height })
}
