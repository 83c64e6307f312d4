//! Dynamic-type fonts.

use serde::{Deserialize, Serialize};

/// The user's preferred text size.
///
/// Categories are ordered from smallest to largest, so a maximum can be
/// applied with `min`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextSizeCategory {
    ExtraSmall,
    Small,
    Medium,
    /// The system default.
    #[default]
    Large,
    ExtraLarge,
    ExtraExtraLarge,
    ExtraExtraExtraLarge,
    AccessibilityMedium,
    AccessibilityLarge,
    AccessibilityExtraLarge,
    AccessibilityExtraExtraLarge,
    AccessibilityExtraExtraExtraLarge,
}

impl TextSizeCategory {
    /// All categories, smallest first.
    pub const ALL: [TextSizeCategory; 12] = [
        Self::ExtraSmall,
        Self::Small,
        Self::Medium,
        Self::Large,
        Self::ExtraLarge,
        Self::ExtraExtraLarge,
        Self::ExtraExtraExtraLarge,
        Self::AccessibilityMedium,
        Self::AccessibilityLarge,
        Self::AccessibilityExtraLarge,
        Self::AccessibilityExtraExtraLarge,
        Self::AccessibilityExtraExtraExtraLarge,
    ];

    /// Whether this is one of the accessibility sizes.
    pub fn is_accessibility_category(self) -> bool {
        self >= Self::AccessibilityMedium
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// A semantic text style whose point size follows the [`TextSizeCategory`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextStyle {
    /// Body text; used for button titles.
    Body,
    /// Footnote text; used for button subtitles.
    Footnote,
}

impl TextStyle {
    /// The point size of this style at a size category.
    pub fn point_size(self, category: TextSizeCategory) -> f32 {
        const BODY: [f32; 12] = [
            14.0, 15.0, 16.0, 17.0, 19.0, 21.0, 23.0, 28.0, 33.0, 40.0, 47.0, 53.0,
        ];
        const FOOTNOTE: [f32; 12] = [
            12.0, 12.0, 12.0, 13.0, 15.0, 17.0, 19.0, 23.0, 27.0, 33.0, 38.0, 44.0,
        ];
        match self {
            TextStyle::Body => BODY[category.index()],
            TextStyle::Footnote => FOOTNOTE[category.index()],
        }
    }
}

/// Vertical font measurements in points.
///
/// `descent` is a positive distance below the baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontMetrics {
    pub point_size: f32,
    pub ascent: f32,
    pub descent: f32,
    pub leading: f32,
}

impl FontMetrics {
    const SYSTEM_ASCENT: f32 = 0.952;
    const SYSTEM_DESCENT: f32 = 0.241;

    /// Metrics of the system UI font at a point size.
    pub fn system(point_size: f32) -> Self {
        Self {
            point_size,
            ascent: point_size * Self::SYSTEM_ASCENT,
            descent: point_size * Self::SYSTEM_DESCENT,
            leading: 0.0,
        }
    }

    /// Distance between consecutive baselines.
    pub fn line_height(&self) -> f32 {
        self.ascent + self.descent + self.leading
    }
}

/// A resolved font: a text style at a concrete size category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Font {
    style: TextStyle,
    category: TextSizeCategory,
    metrics: FontMetrics,
}

impl Font {
    /// The font for `style` at exactly `category`.
    pub fn preferred(style: TextStyle, category: TextSizeCategory) -> Self {
        Self {
            style,
            category,
            metrics: FontMetrics::system(style.point_size(category)),
        }
    }

    /// The font for `style` at `category`, never larger than at `maximum`.
    pub fn scaled(style: TextStyle, category: TextSizeCategory, maximum: TextSizeCategory) -> Self {
        Self::preferred(style, category.min(maximum))
    }

    /// The text style.
    pub fn style(&self) -> TextStyle {
        self.style
    }

    /// The size category the point size was taken from.
    pub fn category(&self) -> TextSizeCategory {
        self.category
    }

    /// The point size.
    pub fn point_size(&self) -> f32 {
        self.metrics.point_size
    }

    /// Vertical metrics.
    pub fn metrics(&self) -> &FontMetrics {
        &self.metrics
    }

    /// Distance between consecutive baselines.
    pub fn line_height(&self) -> f32 {
        self.metrics.line_height()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_body_is_seventeen_points() {
        let font = Font::preferred(TextStyle::Body, TextSizeCategory::default());
        assert_eq!(font.point_size(), 17.0);
        assert!((font.line_height() - 17.0 * 1.193).abs() < 1e-4);
    }

    #[test]
    fn scaled_font_is_capped() {
        let capped = Font::scaled(
            TextStyle::Body,
            TextSizeCategory::AccessibilityExtraExtraExtraLarge,
            TextSizeCategory::AccessibilityMedium,
        );
        assert_eq!(capped.point_size(), 28.0);
        assert_eq!(capped.category(), TextSizeCategory::AccessibilityMedium);

        let small = Font::scaled(
            TextStyle::Footnote,
            TextSizeCategory::ExtraSmall,
            TextSizeCategory::AccessibilityMedium,
        );
        assert_eq!(small.point_size(), 12.0);
    }

    #[test]
    fn categories_are_ordered() {
        assert!(TextSizeCategory::Small < TextSizeCategory::Large);
        assert!(TextSizeCategory::AccessibilityMedium.is_accessibility_category());
        assert!(!TextSizeCategory::ExtraExtraExtraLarge.is_accessibility_category());
        assert!(
            TextSizeCategory::ALL
                .windows(2)
                .all(|pair| TextStyle::Body.point_size(pair[0]) <= TextStyle::Body.point_size(pair[1]))
        );
    }
}
