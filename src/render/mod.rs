//! Host-side rendering: run a shader over a frame and export the result.

mod framebuffer;
mod renderer;

pub use framebuffer::FrameBuffer;
pub use renderer::{pixel_center, Renderer, MAX_PIXELS};
