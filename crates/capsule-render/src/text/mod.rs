//! Text metrics for widget layout.
//!
//! Widgets never shape glyphs themselves. They ask a [`TextMeasurer`] for the
//! extent of a string in a given [`Font`] and lay out against the result:
//!
//! - [`TextSizeCategory`] and [`TextStyle`] pick a dynamic-type point size
//! - [`FontMetrics`] gives ascent, descent and line height for that size
//! - [`TextExtent`] reports the measured box and its first/last baselines
//!
//! [`EstimatedTextMeasurer`] is deterministic and needs no font files, which
//! makes it the default for tests and headless layout. With the
//! `text-shaping` feature, [`ShapedTextMeasurer`] measures real glyph runs.

mod font;
mod measure;
#[cfg(feature = "text-shaping")]
mod shaped;

pub use font::{Font, FontMetrics, TextSizeCategory, TextStyle};
pub use measure::{EstimatedTextMeasurer, TextExtent, TextMeasurer};
#[cfg(feature = "text-shaping")]
pub use shaped::ShapedTextMeasurer;
