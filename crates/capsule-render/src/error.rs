//! Error types for the rendering primitives.

use thiserror::Error;

/// Errors that can occur while preparing render resources.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The bytes could not be decoded as an image.
    #[error("failed to decode image: {0}")]
    ImageDecode(#[from] image::ImageError),

    /// Image header could not be read.
    #[error("failed to read image header: {0}")]
    ImageHeader(#[from] std::io::Error),

    /// The image has a zero width or height.
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
