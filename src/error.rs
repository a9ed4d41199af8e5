//! Errors for the host-side pieces of the crate.
//!
//! Shading itself never fails; only loading configuration, allocating a
//! frame and writing images can.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid render config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("invalid frame dimensions {width}x{height}: must be non-empty and at most {} pixels", crate::render::MAX_PIXELS)]
    InvalidDimensions { width: u32, height: u32 },
}

pub type Result<T> = std::result::Result<T, Error>;
