//! Visual state resolution.
//!
//! Displayed colors are a pure function of the interaction state and the
//! configured colors. The `resolve_*` functions compute them; applying the
//! result to the visual elements is the widget's job.
//!
//! | state                 | background        | border          | text and icon   |
//! |-----------------------|-------------------|-----------------|-----------------|
//! | enabled               | configured        | configured      | tint            |
//! | enabled, highlighted  | configured @ 0.5  | configured @ 0.75 | tint @ 0.75   |
//! | disabled              | quaternary label  | tertiary label  | tertiary label  |
//!
//! An unset background or border stays unset in every state.

use capsule_render::Color;

/// Accent used for text and icon when no tint is configured.
pub const DEFAULT_TINT: Color = Color::SYSTEM_BLUE;

const HIGHLIGHTED_BACKGROUND_ALPHA: f32 = 0.5;
const HIGHLIGHTED_FOREGROUND_ALPHA: f32 = 0.75;

/// Interaction state of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VisualState {
    pub enabled: bool,
    pub highlighted: bool,
}

impl Default for VisualState {
    fn default() -> Self {
        Self {
            enabled: true,
            highlighted: false,
        }
    }
}

/// Colors configured on a button.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ButtonColors {
    pub background: Option<Color>,
    pub border: Option<Color>,
    /// `None` inherits [`DEFAULT_TINT`].
    pub tint: Option<Color>,
}

/// Colors to draw with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedStyle {
    pub background: Option<Color>,
    pub border: Option<Color>,
    /// Title, subtitle and icon tint.
    pub content: Color,
}

impl ButtonColors {
    /// Resolve every color for a state.
    pub fn resolve(&self, state: VisualState) -> ResolvedStyle {
        ResolvedStyle {
            background: resolve_background(state.enabled, state.highlighted, self.background),
            border: resolve_border(state.enabled, state.highlighted, self.border),
            content: resolve_text(state.enabled, state.highlighted, self.tint),
        }
    }
}

/// Background fill color.
pub fn resolve_background(enabled: bool, highlighted: bool, configured: Option<Color>) -> Option<Color> {
    let color = configured?;
    Some(if !enabled {
        Color::QUATERNARY_LABEL
    } else if highlighted {
        color.with_alpha(HIGHLIGHTED_BACKGROUND_ALPHA)
    } else {
        color
    })
}

/// Border stroke color.
pub fn resolve_border(enabled: bool, highlighted: bool, configured: Option<Color>) -> Option<Color> {
    let color = configured?;
    Some(if !enabled {
        Color::TERTIARY_LABEL
    } else if highlighted {
        color.with_alpha(HIGHLIGHTED_FOREGROUND_ALPHA)
    } else {
        color
    })
}

/// Text and icon color. Never absent.
pub fn resolve_text(enabled: bool, highlighted: bool, tint: Option<Color>) -> Color {
    let tint = tint.unwrap_or(DEFAULT_TINT);
    if !enabled {
        Color::TERTIARY_LABEL
    } else if highlighted {
        tint.with_alpha(HIGHLIGHTED_FOREGROUND_ALPHA)
    } else {
        tint
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_colors_stay_unset() {
        for enabled in [true, false] {
            for highlighted in [true, false] {
                assert_eq!(resolve_background(enabled, highlighted, None), None);
                assert_eq!(resolve_border(enabled, highlighted, None), None);
            }
        }
    }

    #[test]
    fn missing_tint_uses_accent() {
        assert_eq!(resolve_text(true, false, None), DEFAULT_TINT);
        assert_eq!(resolve_text(true, true, None).a, 0.75);
    }

    #[test]
    fn disabled_tones_differ() {
        let colors = ButtonColors {
            background: Some(Color::WHITE),
            border: Some(Color::WHITE),
            tint: None,
        };
        let style = colors.resolve(VisualState {
            enabled: false,
            highlighted: false,
        });
        assert_ne!(style.background, style.border);
    }
}
