//! Text measurement.

use unicode_segmentation::UnicodeSegmentation;

use super::font::{Font, FontMetrics};
use crate::logging::targets;
use crate::types::Size;

/// The measured box of a piece of text.
///
/// Baselines are offsets from the top of the box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextExtent {
    pub size: Size,
    pub first_baseline: f32,
    pub last_baseline: f32,
    pub line_count: usize,
}

impl TextExtent {
    /// Build an extent from the widths of the laid-out lines.
    ///
    /// An empty slice is treated as a single empty line.
    pub fn from_lines(line_widths: &[f32], metrics: &FontMetrics) -> Self {
        let line_count = line_widths.len().max(1);
        let width = line_widths.iter().copied().fold(0.0_f32, f32::max);
        let line_height = metrics.line_height();
        Self {
            size: Size::new(width, line_height * line_count as f32),
            first_baseline: metrics.ascent,
            last_baseline: line_height * (line_count - 1) as f32 + metrics.ascent,
            line_count,
        }
    }
}

/// Measures text for layout.
pub trait TextMeasurer: Send + Sync {
    /// Measure `text` in `font`, wrapping at `max_width` when given.
    fn measure(&self, text: &str, font: &Font, max_width: Option<f32>) -> TextExtent;
}

/// A font-file free measurer using a fixed average glyph advance.
///
/// Every grapheme cluster advances by `advance_ratio * point_size`. Lines
/// break on `\n` and, with a maximum width, greedily between words. A single
/// word wider than the limit overflows rather than being split.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimatedTextMeasurer {
    advance_ratio: f32,
}

impl Default for EstimatedTextMeasurer {
    fn default() -> Self {
        Self { advance_ratio: 0.55 }
    }
}

impl EstimatedTextMeasurer {
    /// Create a measurer with a custom advance ratio.
    pub fn with_advance_ratio(advance_ratio: f32) -> Self {
        Self { advance_ratio }
    }

    fn wrap_paragraph(paragraph: &str, advance: f32, limit: f32, lines: &mut Vec<f32>) {
        let mut current: Option<f32> = None;
        for word in paragraph.split(' ') {
            let word_width = word.graphemes(true).count() as f32 * advance;
            current = match current {
                None => Some(word_width),
                Some(width) if width + advance + word_width <= limit => {
                    Some(width + advance + word_width)
                }
                Some(width) => {
                    lines.push(width);
                    Some(word_width)
                }
            };
        }
        lines.push(current.unwrap_or(0.0));
    }
}

impl TextMeasurer for EstimatedTextMeasurer {
    fn measure(&self, text: &str, font: &Font, max_width: Option<f32>) -> TextExtent {
        let advance = font.point_size() * self.advance_ratio;
        let mut lines = Vec::new();

        for paragraph in text.split('\n') {
            match max_width {
                Some(limit) if limit > 0.0 => {
                    Self::wrap_paragraph(paragraph, advance, limit, &mut lines)
                }
                _ => lines.push(paragraph.graphemes(true).count() as f32 * advance),
            }
        }

        tracing::trace!(target: targets::TEXT, lines = lines.len(), "measured text");
        TextExtent::from_lines(&lines, font.metrics())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::{TextSizeCategory, TextStyle};

    fn body() -> Font {
        Font::preferred(TextStyle::Body, TextSizeCategory::Large)
    }

    #[test]
    fn single_line_extent() {
        let measurer = EstimatedTextMeasurer::with_advance_ratio(0.5);
        let extent = measurer.measure("Save", &body(), None);

        assert_eq!(extent.line_count, 1);
        assert_eq!(extent.size.width, 4.0 * 8.5);
        assert_eq!(extent.size.height, body().line_height());
        assert_eq!(extent.first_baseline, extent.last_baseline);
    }

    #[test]
    fn wraps_between_words() {
        let measurer = EstimatedTextMeasurer::with_advance_ratio(0.5);
        // 8.5pt per grapheme: "Save to" = 59.5, "Drive" = 42.5
        let extent = measurer.measure("Save to Drive", &body(), Some(60.0));

        assert_eq!(extent.line_count, 2);
        assert_eq!(extent.size.width, 59.5);
        let line_height = body().line_height();
        assert!((extent.last_baseline - extent.first_baseline - line_height).abs() < 1e-4);
    }

    #[test]
    fn counts_graphemes_not_bytes() {
        let measurer = EstimatedTextMeasurer::with_advance_ratio(0.5);
        let plain = measurer.measure("cafe", &body(), None);
        let accented = measurer.measure("cafe\u{301}", &body(), None);
        assert_eq!(plain.size.width, accented.size.width);
    }

    #[test]
    fn explicit_newlines_start_lines() {
        let measurer = EstimatedTextMeasurer::default();
        let extent = measurer.measure("a\nbb\n", &body(), None);
        assert_eq!(extent.line_count, 3);
    }

    #[test]
    fn empty_text_has_one_line() {
        let extent = EstimatedTextMeasurer::default().measure("", &body(), None);
        assert_eq!(extent.line_count, 1);
        assert_eq!(extent.size.width, 0.0);
        assert_eq!(extent.size.height, body().line_height());
    }
}
