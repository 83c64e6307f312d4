//! Rendering primitives for Capsule.
//!
//! This crate holds the value types the widget layer computes with:
//!
//! - [`Point`], [`Size`], [`Rect`], [`RoundedRect`] geometry
//! - [`Color`] with premultiplied alpha and the semantic system palette
//! - [`DeviceMetrics`] for pixel snapping at a given display scale
//! - [`text`]: dynamic-type fonts, font metrics and text measurement
//! - [`IconImage`]: encoded icon bitmaps with their pixel dimensions
//!
//! Nothing in here talks to a GPU or a window; a renderer consumes these
//! values downstream.

mod device;
mod error;
mod icon;
pub mod logging;
pub mod text;
mod types;

pub use device::DeviceMetrics;
pub use error::{RenderError, RenderResult};
pub use icon::IconImage;
pub use text::{
    EstimatedTextMeasurer, Font, FontMetrics, TextExtent, TextMeasurer, TextSizeCategory,
    TextStyle,
};
pub use types::{Color, CornerRadii, Point, Rect, RoundedRect, Size};

#[cfg(feature = "text-shaping")]
pub use text::ShapedTextMeasurer;
