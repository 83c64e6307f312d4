//! Relationship generation for the pill button.
//!
//! [`PillLayout`] turns a [`ContentLayout`], the measured content, the button
//! metrics and the device metrics into a complete [`ConstraintSet`]. The set
//! is a pure function of those inputs: it is rebuilt from scratch whenever any
//! of them changes and never patched.
//!
//! # Regions
//!
//! - The background spans the button.
//! - The content region is centered in the button and inset from the
//!   background by the corner radius horizontally and by half the corner
//!   radius (floored to a device pixel) vertically.
//! - The title guide holds the title and subtitle and lies inside the content
//!   region, as do the icon and both labels.
//!
//! Present primary elements (the icon and the title guide) are chained along
//! the mode's axis from one content edge to the other, separated by one
//! spacing unit. Absent elements are skipped, so nothing dangles.
//!
//! # Baselines
//!
//! A spacing unit anchored to a text baseline is measured to the glyph
//! extent on that side: a gap below a baseline adds the font's descent and a
//! gap above one adds its ascent. Between title and subtitle the baselines
//! are `title descent + subtitle ascent + spacing` apart; in vertical modes
//! the first baseline sits `spacing + ascent` below the icon and the icon
//! sits `descent + spacing` below the last baseline.

use std::fmt;

use capsule_render::{DeviceMetrics, Font, Rect, Size, TextExtent};

use super::constraint::{Constraint, ConstraintSet, LayoutItem, Strength};
use super::solver::{SolveResult, Solution, solve};
use crate::config::ButtonMetrics;
use crate::logging::targets;

use LayoutItem::{Background, Button, Content, Icon, Subtitle, Title, TitleGuide};

/// Arrangement of the icon relative to the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ContentLayout {
    /// Icon leading, text trailing.
    #[default]
    Horizontal,
    /// Text leading, icon trailing.
    HorizontalReversed,
    /// Icon above text.
    Vertical,
    /// Text above icon.
    VerticalReversed,
}

impl ContentLayout {
    /// All modes in index order.
    pub const ALL: [ContentLayout; 4] = [
        Self::Horizontal,
        Self::HorizontalReversed,
        Self::Vertical,
        Self::VerticalReversed,
    ];

    /// Stable index in `0..4`.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The mode at `index`, if any.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Horizontal | Self::HorizontalReversed)
    }

    pub fn is_vertical(self) -> bool {
        !self.is_horizontal()
    }

    /// Whether the text comes before the icon.
    pub fn is_reversed(self) -> bool {
        matches!(self, Self::HorizontalReversed | Self::VerticalReversed)
    }
}

impl fmt::Display for ContentLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Horizontal => "horizontal",
            Self::HorizontalReversed => "horizontal-reversed",
            Self::Vertical => "vertical",
            Self::VerticalReversed => "vertical-reversed",
        })
    }
}

/// Which optional elements a button shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ContentSet {
    pub icon: bool,
    pub title: bool,
    pub subtitle: bool,
}

impl ContentSet {
    pub const EMPTY: ContentSet = ContentSet {
        icon: false,
        title: false,
        subtitle: false,
    };

    pub fn new(icon: bool, title: bool, subtitle: bool) -> Self {
        Self {
            icon,
            title,
            subtitle,
        }
    }

    /// Every one of the eight combinations.
    pub fn all() -> impl Iterator<Item = ContentSet> {
        (0..8u8).map(|bits| Self::new(bits & 1 != 0, bits & 2 != 0, bits & 4 != 0))
    }

    pub fn has_text(&self) -> bool {
        self.title || self.subtitle
    }

    pub fn is_empty(&self) -> bool {
        !self.icon && !self.has_text()
    }
}

/// A measured label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextBlock {
    pub extent: TextExtent,
    pub font: Font,
}

/// Measurements of the present content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContentMetrics {
    /// Width over height of the icon, when there is one.
    pub icon_aspect_ratio: Option<f32>,
    pub title: Option<TextBlock>,
    pub subtitle: Option<TextBlock>,
    /// The title font; its line height sizes the icon even without a title.
    pub title_font: Font,
}

impl ContentMetrics {
    /// Metrics with no content.
    pub fn empty(title_font: Font) -> Self {
        Self {
            icon_aspect_ratio: None,
            title: None,
            subtitle: None,
            title_font,
        }
    }

    /// Which elements are present.
    pub fn content_set(&self) -> ContentSet {
        ContentSet::new(
            self.icon_aspect_ratio.is_some(),
            self.title.is_some(),
            self.subtitle.is_some(),
        )
    }
}

/// How the button frame is determined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sizing {
    /// As small as the content allows.
    Fitting,
    /// Exactly this size.
    Fixed(Size),
}

/// The solved frames of one layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutFrames {
    pub button: Rect,
    pub background: Rect,
    pub content: Rect,
    pub title_guide: Rect,
    pub icon: Option<Rect>,
    pub title: Option<Rect>,
    pub subtitle: Option<Rect>,
}

impl LayoutFrames {
    fn from_solution(solution: &Solution, content: ContentSet) -> Self {
        let present = |shown: bool, item| shown.then(|| solution.frame(item));
        Self {
            button: solution.frame(Button),
            background: solution.frame(Background),
            content: solution.frame(Content),
            title_guide: solution.frame(TitleGuide),
            icon: present(content.icon, Icon),
            title: present(content.title, Title),
            subtitle: present(content.subtitle, Subtitle),
        }
    }

    /// Move every frame by a delta.
    pub fn offset(&self, dx: f32, dy: f32) -> Self {
        let shift = |rect: Rect| rect.offset(dx, dy);
        Self {
            button: shift(self.button),
            background: shift(self.background),
            content: shift(self.content),
            title_guide: shift(self.title_guide),
            icon: self.icon.map(shift),
            title: self.title.map(shift),
            subtitle: self.subtitle.map(shift),
        }
    }

    /// Frames of the present elements, for containment checks.
    pub fn elements(&self) -> impl Iterator<Item = Rect> {
        [self.icon, self.title, self.subtitle].into_iter().flatten()
    }
}

/// The pill button layout engine.
#[derive(Debug, Clone, PartialEq)]
pub struct PillLayout {
    mode: ContentLayout,
    content: ContentMetrics,
    metrics: ButtonMetrics,
    device: DeviceMetrics,
}

impl PillLayout {
    pub fn new(
        mode: ContentLayout,
        content: ContentMetrics,
        metrics: ButtonMetrics,
        device: DeviceMetrics,
    ) -> Self {
        Self {
            mode,
            content,
            metrics,
            device,
        }
    }

    pub fn mode(&self) -> ContentLayout {
        self.mode
    }

    pub fn content_set(&self) -> ContentSet {
        self.content.content_set()
    }

    /// Generate the complete relationship set.
    pub fn relationships(&self, sizing: Sizing) -> ConstraintSet {
        let mut set = ConstraintSet::new();
        self.add_sizing(&mut set, sizing);
        self.add_regions(&mut set);
        self.add_elements(&mut set);
        if self.mode.is_horizontal() {
            self.add_horizontal_chain(&mut set);
        } else {
            self.add_vertical_chain(&mut set);
        }
        self.add_label_stack(&mut set);

        tracing::trace!(
            target: targets::LAYOUT,
            mode = %self.mode,
            relationships = set.len(),
            "generated relationships"
        );
        set
    }

    /// The smallest button size satisfying every relationship, rounded up to
    /// whole device pixels.
    pub fn fitting_size(&self) -> SolveResult<Size> {
        let solution = solve(self.relationships(Sizing::Fitting).as_slice())?;
        let size = solution.frame(Button).size;
        Ok(self.device.ceil_size(Size::new(
            (size.width - 1e-6).max(0.0),
            (size.height - 1e-6).max(0.0),
        )))
    }

    /// Solve for a button of exactly `size`, placed at the origin.
    pub fn solve(&self, size: Size) -> SolveResult<LayoutFrames> {
        let solution = solve(self.relationships(Sizing::Fixed(size)).as_slice())?;
        Ok(LayoutFrames::from_solution(&solution, self.content_set()))
    }

    fn spacing(&self) -> f64 {
        f64::from(self.metrics.system_spacing)
    }

    fn present_items(&self) -> Vec<LayoutItem> {
        let content = self.content_set();
        let mut items = vec![Button, Background, Content, TitleGuide];
        items.extend(
            [
                (content.icon, Icon),
                (content.title, Title),
                (content.subtitle, Subtitle),
            ]
            .into_iter()
            .filter_map(|(shown, item)| shown.then_some(item)),
        );
        items
    }

    /// Icon and title guide in axis order, skipping absent ones.
    fn primary_chain(&self) -> Vec<LayoutItem> {
        let content = self.content_set();
        let mut chain: Vec<LayoutItem> = [(content.icon, Icon), (content.has_text(), TitleGuide)]
            .into_iter()
            .filter_map(|(shown, item)| shown.then_some(item))
            .collect();
        if self.mode.is_reversed() {
            chain.reverse();
        }
        chain
    }

    fn add_sizing(&self, set: &mut ConstraintSet, sizing: Sizing) {
        set.push(Constraint::equal(Button.left(), 0.0, "button origin x"));
        set.push(Constraint::equal(Button.top(), 0.0, "button origin y"));
        match sizing {
            Sizing::Fitting => {
                set.push(
                    Constraint::equal(Button.width(), 0.0, "button width hugging")
                        .with_strength(Strength::WEAK),
                );
                set.push(
                    Constraint::equal(Button.height(), 0.0, "button height hugging")
                        .with_strength(Strength::WEAK),
                );
            }
            Sizing::Fixed(size) => {
                set.push(Constraint::equal(Button.width(), f64::from(size.width), "button width"));
                set.push(Constraint::equal(Button.height(), f64::from(size.height), "button height"));
            }
        }
    }

    fn add_regions(&self, set: &mut ConstraintSet) {
        for item in self.present_items() {
            set.push(Constraint::at_least(item.right(), item.left(), "non-negative width"));
            set.push(Constraint::at_least(item.bottom(), item.top(), "non-negative height"));
        }

        set.push(Constraint::equal(Background.left(), Button.left(), "background leading"));
        set.push(Constraint::equal(Background.right(), Button.right(), "background trailing"));
        set.push(Constraint::equal(Background.top(), Button.top(), "background top"));
        set.push(Constraint::equal(Background.bottom(), Button.bottom(), "background bottom"));

        let radius = f64::from(self.metrics.corner_radius);
        let vertical = f64::from(self.device.floor_to_pixel(self.metrics.corner_radius / 2.0));
        set.push(Constraint::at_least(Content.left(), Background.left() + radius, "content leading inset"));
        set.push(Constraint::at_most(Content.right(), Background.right() - radius, "content trailing inset"));
        set.push(Constraint::at_least(Content.top(), Background.top() + vertical, "content top inset"));
        set.push(Constraint::at_most(Content.bottom(), Background.bottom() - vertical, "content bottom inset"));

        set.push(Constraint::equal(
            Content.left() + Content.right(),
            Button.left() + Button.right(),
            "content centered horizontally",
        ));
        set.push(Constraint::equal(
            Content.top() + Content.bottom(),
            Button.top() + Button.bottom(),
            "content centered vertically",
        ));
        set.push(Constraint::equal(Content.width(), 0.0, "content width hugging").with_strength(Strength::WEAK));
        set.push(Constraint::equal(Content.height(), 0.0, "content height hugging").with_strength(Strength::WEAK));

        contain(set, TitleGuide, Content);
        set.push(Constraint::equal(TitleGuide.width(), 0.0, "title guide width hugging").with_strength(Strength::WEAK));
        set.push(Constraint::equal(TitleGuide.height(), 0.0, "title guide height hugging").with_strength(Strength::WEAK));

        if !self.content_set().has_text() {
            set.push(Constraint::equal(TitleGuide.center_x(), Content.center_x(), "empty title guide centered x"));
            set.push(Constraint::equal(TitleGuide.center_y(), Content.center_y(), "empty title guide centered y"));
        }
    }

    fn add_elements(&self, set: &mut ConstraintSet) {
        if let Some(aspect) = self.content.icon_aspect_ratio {
            contain(set, Icon, Content);
            let line_height = f64::from(self.content.title_font.line_height());
            let aspect = f64::from(aspect);
            set.push(
                Constraint::equal(Icon.width(), line_height * aspect, "icon width from line height")
                    .with_strength(Strength::MEDIUM),
            );
            set.push(Constraint::equal(Icon.height(), Icon.width() * (1.0 / aspect), "icon aspect ratio"));
        }

        for (item, block) in self.labels() {
            contain(set, item, Content);
            let size = block.extent.size;
            set.push(Constraint::equal(item.height(), f64::from(size.height), "label height"));
            set.push(
                Constraint::at_least(item.width(), f64::from(size.width), "label compression resistance")
                    .with_strength(Strength::STRONG),
            );
            set.push(
                Constraint::at_most(item.width(), f64::from(size.width), "label hugging")
                    .with_strength(Strength::MEDIUM),
            );
        }
    }

    fn add_horizontal_chain(&self, set: &mut ConstraintSet) {
        let chain = self.primary_chain();
        let (Some(&first), Some(&last)) = (chain.first(), chain.last()) else {
            return;
        };

        set.push(Constraint::equal(first.left(), Content.left(), "leading element at content edge"));
        for pair in chain.windows(2) {
            set.push(Constraint::equal(
                pair[1].left(),
                pair[0].right() + self.spacing(),
                "horizontal element spacing",
            ));
        }
        set.push(Constraint::equal(last.right(), Content.right(), "trailing element at content edge"));

        for &item in &chain {
            set.push(Constraint::equal(item.center_y(), Content.center_y(), "element centered vertically"));
        }
    }

    fn add_vertical_chain(&self, set: &mut ConstraintSet) {
        let chain = self.primary_chain();
        let (Some(&first), Some(&last)) = (chain.first(), chain.last()) else {
            return;
        };

        set.push(Constraint::equal(first.top(), Content.top(), "top element at content edge"));
        set.push(Constraint::equal(last.bottom(), Content.bottom(), "bottom element at content edge"));

        if self.content_set().icon {
            set.push(Constraint::equal(Icon.center_x(), Content.center_x(), "icon centered horizontally"));
        }
        if self.content_set().has_text() {
            set.push(Constraint::equal(TitleGuide.left(), Content.left(), "title guide leading"));
            set.push(Constraint::equal(TitleGuide.right(), Content.right(), "title guide trailing"));
        }

        if chain.len() < 2 {
            return;
        }
        let labels = self.labels();
        let spacing = self.spacing();
        if self.mode.is_reversed() {
            if let Some(&(label, block)) = labels.last() {
                let baseline = label.top() + f64::from(block.extent.last_baseline);
                set.push(Constraint::equal(
                    Icon.top(),
                    baseline + f64::from(block.font.metrics().descent) + spacing,
                    "icon below last baseline",
                ));
            }
        } else if let Some(&(label, block)) = labels.first() {
            let baseline = label.top() + f64::from(block.extent.first_baseline);
            set.push(Constraint::equal(
                baseline,
                Icon.bottom() + spacing + f64::from(block.font.metrics().ascent),
                "first baseline below icon",
            ));
        }
    }

    fn add_label_stack(&self, set: &mut ConstraintSet) {
        match (self.content.title, self.content.subtitle) {
            (Some(title), Some(subtitle)) => {
                set.push(Constraint::equal(Title.top(), TitleGuide.top(), "title top"));
                set.push(Constraint::equal(Subtitle.bottom(), TitleGuide.bottom(), "subtitle bottom"));
                for label in [Title, Subtitle] {
                    set.push(Constraint::equal(label.left(), TitleGuide.left(), "label leading"));
                    set.push(Constraint::equal(label.right(), TitleGuide.right(), "label trailing"));
                }
                set.push(Constraint::equal(Title.width(), Subtitle.width(), "equal label widths"));

                let title_baseline = Title.top() + f64::from(title.extent.last_baseline);
                let subtitle_baseline = Subtitle.top() + f64::from(subtitle.extent.first_baseline);
                let gap = f64::from(title.font.metrics().descent)
                    + f64::from(subtitle.font.metrics().ascent)
                    + self.spacing();
                set.push(Constraint::equal(subtitle_baseline, title_baseline + gap, "baseline spacing"));
            }
            (Some(_), None) => fill(set, Title, TitleGuide),
            (None, Some(_)) => fill(set, Subtitle, TitleGuide),
            (None, None) => {}
        }
    }

    fn labels(&self) -> Vec<(LayoutItem, TextBlock)> {
        [(Title, self.content.title), (Subtitle, self.content.subtitle)]
            .into_iter()
            .filter_map(|(item, block)| block.map(|block| (item, block)))
            .collect()
    }
}

fn contain(set: &mut ConstraintSet, inner: LayoutItem, outer: LayoutItem) {
    set.push(Constraint::at_least(inner.left(), outer.left(), "contained leading"));
    set.push(Constraint::at_least(inner.top(), outer.top(), "contained top"));
    set.push(Constraint::at_most(inner.right(), outer.right(), "contained trailing"));
    set.push(Constraint::at_most(inner.bottom(), outer.bottom(), "contained bottom"));
}

fn fill(set: &mut ConstraintSet, inner: LayoutItem, outer: LayoutItem) {
    set.push(Constraint::equal(inner.left(), outer.left(), "fill leading"));
    set.push(Constraint::equal(inner.top(), outer.top(), "fill top"));
    set.push(Constraint::equal(inner.right(), outer.right(), "fill trailing"));
    set.push(Constraint::equal(inner.bottom(), outer.bottom(), "fill bottom"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use capsule_render::{EstimatedTextMeasurer, TextMeasurer, TextSizeCategory, TextStyle};

    fn metrics(content: ContentSet) -> ContentMetrics {
        let measurer = EstimatedTextMeasurer::default();
        let title_font = Font::preferred(TextStyle::Body, TextSizeCategory::Large);
        let subtitle_font = Font::preferred(TextStyle::Footnote, TextSizeCategory::Large);
        let block = |text: &str, font: Font| TextBlock {
            extent: measurer.measure(text, &font, None),
            font,
        };
        ContentMetrics {
            icon_aspect_ratio: content.icon.then_some(1.5),
            title: content.title.then(|| block("Save", title_font)),
            subtitle: content.subtitle.then(|| block("to Drive", subtitle_font)),
            title_font,
        }
    }

    fn engine(mode: ContentLayout, content: ContentSet) -> PillLayout {
        PillLayout::new(mode, metrics(content), ButtonMetrics::default(), DeviceMetrics::default())
    }

    #[test]
    fn mode_indices_round_trip() {
        for mode in ContentLayout::ALL {
            assert_eq!(ContentLayout::from_index(mode.index()), Some(mode));
        }
        assert_eq!(ContentLayout::from_index(4), None);
        assert_eq!(ContentLayout::default(), ContentLayout::Horizontal);
    }

    #[test]
    fn eight_content_sets() {
        let sets: Vec<_> = ContentSet::all().collect();
        assert_eq!(sets.len(), 8);
        assert!(sets.contains(&ContentSet::EMPTY));
        assert!(sets.contains(&ContentSet::new(true, true, true)));
    }

    #[test]
    fn empty_button_collapses_to_insets() {
        let layout = engine(ContentLayout::Horizontal, ContentSet::EMPTY);
        let size = layout.fitting_size().unwrap();
        assert_eq!(size, Size::new(16.0, 8.0));

        let frames = layout.solve(Size::new(100.0, 40.0)).unwrap();
        assert!(frames.content.width().abs() < 1e-3);
        assert!((frames.content.center().x - 50.0).abs() < 1e-3);
        assert!((frames.title_guide.center().y - 20.0).abs() < 1e-3);
    }

    #[test]
    fn horizontal_places_icon_before_text() {
        let layout = engine(ContentLayout::Horizontal, ContentSet::new(true, true, false));
        let size = layout.fitting_size().unwrap();
        let frames = layout.solve(size).unwrap();

        let icon = frames.icon.unwrap();
        let title = frames.title.unwrap();
        assert!((title.left() - icon.right() - 8.0).abs() < 1e-3);
        assert!((icon.center().y - title.center().y).abs() < 1e-3);
        assert!((icon.left() - frames.content.left()).abs() < 1e-3);
        assert!((title.right() - frames.content.right()).abs() < 1e-3);
    }

    #[test]
    fn horizontal_reversed_places_text_first() {
        let layout = engine(ContentLayout::HorizontalReversed, ContentSet::new(true, true, false));
        let frames = layout.solve(layout.fitting_size().unwrap()).unwrap();

        let icon = frames.icon.unwrap();
        let title = frames.title.unwrap();
        assert!((icon.left() - title.right() - 8.0).abs() < 1e-3);
    }

    #[test]
    fn vertical_spacing_is_measured_to_the_baseline() {
        let layout = engine(ContentLayout::Vertical, ContentSet::new(true, true, false));
        let frames = layout.solve(layout.fitting_size().unwrap()).unwrap();

        let icon = frames.icon.unwrap();
        let title = frames.title.unwrap();
        let font = Font::preferred(TextStyle::Body, TextSizeCategory::Large);
        let baseline = title.top() + font.metrics().ascent;
        assert!((baseline - icon.bottom() - (8.0 + font.metrics().ascent)).abs() < 1e-3);
        assert!((baseline - icon.bottom() - 24.184).abs() < 1e-2);
        assert!((icon.center().x - title.center().x).abs() < 1e-3);
    }

    #[test]
    fn icon_width_follows_title_line_height() {
        let layout = engine(ContentLayout::Horizontal, ContentSet::new(true, false, false));
        let frames = layout.solve(layout.fitting_size().unwrap()).unwrap();
        let icon = frames.icon.unwrap();
        let line_height = Font::preferred(TextStyle::Body, TextSizeCategory::Large).line_height();

        assert!((icon.width() - line_height * 1.5).abs() < 1e-3);
        assert!((icon.height() - line_height).abs() < 1e-3);
    }

    #[test]
    fn title_and_subtitle_share_width() {
        let layout = engine(ContentLayout::Vertical, ContentSet::new(false, true, true));
        let frames = layout.solve(layout.fitting_size().unwrap()).unwrap();
        let title = frames.title.unwrap();
        let subtitle = frames.subtitle.unwrap();

        assert!((title.width() - subtitle.width()).abs() < 1e-3);
        assert!(subtitle.top() >= title.bottom() - 1e-3);
    }

    #[test]
    fn title_to_subtitle_baseline_distance() {
        let layout = engine(ContentLayout::Vertical, ContentSet::new(false, true, true));
        let frames = layout.solve(layout.fitting_size().unwrap()).unwrap();
        let title_font = *Font::preferred(TextStyle::Body, TextSizeCategory::Large).metrics();
        let subtitle_font = *Font::preferred(TextStyle::Footnote, TextSizeCategory::Large).metrics();

        let title_baseline = frames.title.unwrap().top() + title_font.ascent;
        let subtitle_baseline = frames.subtitle.unwrap().top() + subtitle_font.ascent;
        let expected = title_font.descent + subtitle_font.ascent + 8.0;
        assert!((subtitle_baseline - title_baseline - expected).abs() < 1e-3);
        assert!((expected - 24.473).abs() < 1e-2);

        // The glyph extents are exactly one spacing unit apart.
        assert!((frames.subtitle.unwrap().top() - frames.title.unwrap().bottom() - 8.0).abs() < 1e-3);
    }

    #[test]
    fn vertical_reversed_icon_sits_below_last_baseline() {
        let layout = engine(ContentLayout::VerticalReversed, ContentSet::new(true, true, true));
        let frames = layout.solve(layout.fitting_size().unwrap()).unwrap();
        let subtitle_font = *Font::preferred(TextStyle::Footnote, TextSizeCategory::Large).metrics();

        let last_baseline = frames.subtitle.unwrap().top() + subtitle_font.ascent;
        let icon = frames.icon.unwrap();
        assert!((icon.top() - last_baseline - (subtitle_font.descent + 8.0)).abs() < 1e-3);
    }

    #[test]
    fn vertical_inset_is_half_radius_floored_to_pixel() {
        let rounded = ButtonMetrics::default().with_corner_radius(5.0);
        let empty = metrics(ContentSet::EMPTY);

        let layout = PillLayout::new(ContentLayout::Horizontal, empty, rounded, DeviceMetrics::default());
        assert_eq!(layout.fitting_size().unwrap(), Size::new(10.0, 4.0));
        let frames = layout.solve(Size::new(10.0, 4.0)).unwrap();
        assert!((frames.content.top() - frames.background.top() - 2.0).abs() < 1e-3);

        let retina = PillLayout::new(ContentLayout::Horizontal, empty, rounded, DeviceMetrics::new(2.0));
        assert_eq!(retina.fitting_size().unwrap(), Size::new(10.0, 5.0));
        let frames = retina.solve(Size::new(10.0, 5.0)).unwrap();
        assert!((frames.content.top() - frames.background.top() - 2.5).abs() < 1e-3);
    }

    #[test]
    fn larger_bounds_keep_content_centered() {
        let layout = engine(ContentLayout::Horizontal, ContentSet::new(true, true, true));
        let frames = layout.solve(Size::new(300.0, 120.0)).unwrap();

        assert!((frames.content.center().x - 150.0).abs() < 1e-3);
        assert!((frames.content.center().y - 60.0).abs() < 1e-3);
        assert!(frames.button.contains_rect(&frames.background, 1e-3));
        assert!(frames.background.contains_rect(&frames.button, 1e-3));
    }
}
