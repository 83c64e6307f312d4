//! Icon images.

use std::fmt;
use std::io::Cursor;
use std::sync::Arc;

use crate::error::{RenderError, RenderResult};
use crate::logging::targets;
use crate::types::Size;

/// An encoded icon bitmap (PNG, JPEG, ...) with its pixel dimensions.
///
/// The encoded bytes are kept as-is so the image can be archived and
/// restored without re-encoding. Cloning is cheap.
#[derive(Clone, PartialEq, Eq)]
pub struct IconImage {
    data: Arc<[u8]>,
    width: u32,
    height: u32,
}

impl IconImage {
    /// Create an icon from encoded image bytes.
    ///
    /// Only the image header is read; the pixels are not decoded.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> RenderResult<Self> {
        let bytes: Vec<u8> = bytes.into();
        let reader = image::ImageReader::new(Cursor::new(bytes.as_slice())).with_guessed_format()?;
        let (width, height) = reader.into_dimensions()?;

        if width == 0 || height == 0 {
            return Err(RenderError::InvalidDimensions { width, height });
        }
        tracing::trace!(target: targets::ICON, width, height, "read icon header");

        Ok(Self {
            data: bytes.into(),
            width,
            height,
        })
    }

    /// Encode an in-memory RGBA image as PNG and wrap it.
    pub fn from_rgba(image: &image::RgbaImage) -> RenderResult<Self> {
        let mut bytes = Vec::new();
        image.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)?;
        Self::from_bytes(bytes)
    }

    /// The encoded image bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel size as floating point.
    pub fn size(&self) -> Size {
        Size::from((self.width, self.height))
    }

    /// Width divided by height.
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

impl fmt::Debug for IconImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IconImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.data.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_dimensions_from_png() {
        let icon = IconImage::from_rgba(&image::RgbaImage::new(30, 20)).unwrap();
        assert_eq!(icon.width(), 30);
        assert_eq!(icon.height(), 20);
        assert!((icon.aspect_ratio() - 1.5).abs() < f32::EPSILON);
    }

    #[test]
    fn rejects_garbage() {
        assert!(IconImage::from_bytes(b"definitely not an image".to_vec()).is_err());
    }

    #[test]
    fn bytes_survive_round_trip() {
        let icon = IconImage::from_rgba(&image::RgbaImage::new(4, 4)).unwrap();
        let copy = IconImage::from_bytes(icon.bytes().to_vec()).unwrap();
        assert_eq!(icon, copy);
    }
}
