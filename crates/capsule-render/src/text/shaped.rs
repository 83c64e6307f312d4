//! Measurement backed by cosmic-text shaping.

use cosmic_text::{Attrs, Buffer, FontSystem, Metrics, Shaping};
use parking_lot::Mutex;

use super::font::Font;
use super::measure::{TextExtent, TextMeasurer};
use crate::logging::targets;

/// Measures text by shaping it with the fonts installed on the system.
///
/// Vertical metrics still come from the [`Font`], so baselines agree with
/// the estimated measurer; only line widths and wrapping come from shaping.
pub struct ShapedTextMeasurer {
    font_system: Mutex<FontSystem>,
}

impl ShapedTextMeasurer {
    /// Load the system font database.
    pub fn new() -> Self {
        tracing::debug!(target: targets::TEXT, "loading system fonts");
        Self {
            font_system: Mutex::new(FontSystem::new()),
        }
    }
}

impl Default for ShapedTextMeasurer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ShapedTextMeasurer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShapedTextMeasurer").finish_non_exhaustive()
    }
}

impl TextMeasurer for ShapedTextMeasurer {
    fn measure(&self, text: &str, font: &Font, max_width: Option<f32>) -> TextExtent {
        let mut font_system = self.font_system.lock();
        let metrics = Metrics::new(font.point_size(), font.line_height());
        let mut buffer = Buffer::new(&mut font_system, metrics);

        buffer.set_size(&mut font_system, max_width.filter(|w| *w > 0.0), None);
        buffer.set_text(&mut font_system, text, Attrs::new(), Shaping::Advanced);
        buffer.shape_until_scroll(&mut font_system, false);

        let widths: Vec<f32> = buffer.layout_runs().map(|run| run.line_w).collect();
        TextExtent::from_lines(&widths, font.metrics())
    }
}
