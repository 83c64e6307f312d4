//! Pill button widget implementation.
//!
//! This module provides [`PillButton`], a rounded button that shows any
//! combination of an icon, a title and a subtitle in one of four
//! [`ContentLayout`]s.
//!
//! # Example
//!
//! ```
//! use capsule::render::Color;
//! use capsule::widget::layout::ContentLayout;
//! use capsule::widget::widgets::PillButton;
//!
//! let mut button = PillButton::new()
//!     .with_title("Save")
//!     .with_subtitle("to Drive")
//!     .with_border_color(Color::SYSTEM_BLUE)
//!     .with_content_layout(ContentLayout::Vertical);
//!
//! button.primary_action().connect(|_| println!("saving"));
//!
//! let size = button.size_hint();
//! let frames = button.layout();
//! assert!(frames.button.width() >= size.width);
//! ```

use std::fmt;
use std::sync::Arc;

use capsule_core::{Property, Signal};
use capsule_render::{
    Color, EstimatedTextMeasurer, Font, IconImage, Point, Rect, RoundedRect, Size, TextMeasurer,
    TextStyle,
};

use crate::archive::{self, ArchiveRecord};
use crate::config::{ButtonMetrics, TraitEnvironment};
use crate::logging::targets;
use crate::widget::events::{
    Key, KeyPressEvent, KeyReleaseEvent, MouseButton, MouseMoveEvent, MousePressEvent,
    MouseReleaseEvent,
};
use crate::widget::layout::{ContentLayout, ContentMetrics, LayoutFrames, PillLayout, TextBlock};
use crate::widget::paint::{DisplayList, Painter};
use crate::widget::slot::Slot;
use crate::widget::style::{ButtonColors, ResolvedStyle, VisualState};

/// What started the current press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tracking {
    Pointer,
    Key(Key),
}

/// A pill-shaped button with an optional icon, title and subtitle.
///
/// # Layout
///
/// Geometry is computed lazily. Every property that affects layout discards
/// the previous relationship set and cached frames; the next call to
/// [`layout`](Self::layout), [`size_hint`](Self::size_hint) or
/// [`paint`](Self::paint) regenerates them from the current values. The
/// button never shrinks below its fitting size: smaller bounds are grown.
///
/// # Visual States
///
/// - **Normal**: configured background and border, tinted content
/// - **Highlighted**: while pressed and the pointer is inside
/// - **Disabled**: neutral colors, input ignored
///
/// # Signals
///
/// - `primary_action`: press and release inside the button, or Space/Enter
/// - `pressed`: a press began
/// - `released`: a tracked press ended, inside or not
/// - `content_layout_changed`: the layout mode changed
pub struct PillButton {
    icon: Slot<IconImage>,
    title: Slot<String>,
    subtitle: Slot<String>,
    colors: ButtonColors,

    content_layout: Property<ContentLayout>,
    enabled: Property<bool>,
    highlighted: Property<bool>,

    metrics: ButtonMetrics,
    traits: TraitEnvironment,
    measurer: Arc<dyn TextMeasurer>,
    title_font: Font,
    subtitle_font: Font,

    geometry: Rect,
    engine: Option<PillLayout>,
    frames: Option<LayoutFrames>,
    style: ResolvedStyle,
    tracking: Option<Tracking>,

    primary_action: Signal<()>,
    pressed: Signal<()>,
    released: Signal<()>,
    content_layout_changed: Signal<ContentLayout>,
}

impl Default for PillButton {
    fn default() -> Self {
        Self::new()
    }
}

impl PillButton {
    /// Create an empty, enabled button in the horizontal layout.
    pub fn new() -> Self {
        let metrics = ButtonMetrics::default();
        let traits = TraitEnvironment::default();
        let colors = ButtonColors::default();
        let (title_font, subtitle_font) = fonts(&metrics, &traits);

        Self {
            icon: Slot::Absent,
            title: Slot::Absent,
            subtitle: Slot::Absent,
            colors,
            content_layout: Property::new(ContentLayout::default()),
            enabled: Property::new(true),
            highlighted: Property::new(false),
            metrics,
            traits,
            measurer: Arc::new(EstimatedTextMeasurer::default()),
            title_font,
            subtitle_font,
            geometry: Rect::ZERO,
            engine: None,
            frames: None,
            style: colors.resolve(VisualState::default()),
            tracking: None,
            primary_action: Signal::new(),
            pressed: Signal::new(),
            released: Signal::new(),
            content_layout_changed: Signal::new(),
        }
    }

    /// Rebuild a button from an archive record.
    ///
    /// Fields missing from the record stay unset.
    pub fn decode_from(record: &ArchiveRecord) -> Self {
        let decoded = archive::decode(record);
        let mut button = Self::new();
        button.set_title(decoded.title);
        button.set_subtitle(decoded.subtitle);
        button.set_image(decoded.image);
        button.set_border_color(decoded.border_color);
        button
    }

    /// Archive the persistent properties.
    pub fn encode(&self) -> ArchiveRecord {
        archive::encode(
            self.title(),
            self.subtitle(),
            self.image(),
            self.colors.border,
        )
    }

    // =========================================================================
    // Content
    // =========================================================================

    /// The icon, if any.
    pub fn image(&self) -> Option<&IconImage> {
        self.icon.get()
    }

    /// Set or remove the icon.
    pub fn set_image(&mut self, image: Option<IconImage>) {
        if self.icon.set(image) {
            self.invalidate_layout();
        }
    }

    /// Set the icon using builder pattern.
    pub fn with_image(mut self, image: IconImage) -> Self {
        self.set_image(Some(image));
        self
    }

    /// The title, if any.
    pub fn title(&self) -> Option<&str> {
        self.title.get().map(String::as_str)
    }

    /// Set or remove the title.
    pub fn set_title(&mut self, title: Option<String>) {
        if self.title.set(title) {
            self.invalidate_layout();
        }
    }

    /// Set the title using builder pattern.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.set_title(Some(title.into()));
        self
    }

    /// The subtitle, if any.
    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.get().map(String::as_str)
    }

    /// Set or remove the subtitle.
    pub fn set_subtitle(&mut self, subtitle: Option<String>) {
        if self.subtitle.set(subtitle) {
            self.invalidate_layout();
        }
    }

    /// Set the subtitle using builder pattern.
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.set_subtitle(Some(subtitle.into()));
        self
    }

    // =========================================================================
    // Colors
    // =========================================================================

    pub fn background_color(&self) -> Option<Color> {
        self.colors.background
    }

    pub fn set_background_color(&mut self, color: Option<Color>) {
        self.colors.background = color;
        self.apply_style();
    }

    pub fn with_background_color(mut self, color: Color) -> Self {
        self.set_background_color(Some(color));
        self
    }

    pub fn border_color(&self) -> Option<Color> {
        self.colors.border
    }

    pub fn set_border_color(&mut self, color: Option<Color>) {
        self.colors.border = color;
        self.apply_style();
    }

    pub fn with_border_color(mut self, color: Color) -> Self {
        self.set_border_color(Some(color));
        self
    }

    /// The effective tint: the configured one or the inherited default.
    pub fn tint_color(&self) -> Color {
        self.colors.tint.unwrap_or(crate::widget::style::DEFAULT_TINT)
    }

    /// Set the tint. `None` inherits the default accent.
    pub fn set_tint_color(&mut self, color: Option<Color>) {
        self.colors.tint = color;
        self.apply_style();
    }

    pub fn with_tint_color(mut self, color: Color) -> Self {
        self.set_tint_color(Some(color));
        self
    }

    /// Colors for the current state.
    pub fn resolved_style(&self) -> ResolvedStyle {
        self.style
    }

    // =========================================================================
    // State
    // =========================================================================

    pub fn content_layout(&self) -> ContentLayout {
        self.content_layout.get()
    }

    /// Change the layout mode, discarding all derived geometry.
    pub fn set_content_layout(&mut self, layout: ContentLayout) {
        if self.content_layout.set(layout) {
            tracing::debug!(target: targets::LAYOUT, mode = %layout, "content layout changed");
            self.invalidate_layout();
            self.content_layout_changed.emit(layout);
        }
    }

    pub fn with_content_layout(mut self, layout: ContentLayout) -> Self {
        self.set_content_layout(layout);
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.get()
    }

    /// Enable or disable the button. Disabling cancels a press in progress.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled.set(enabled) {
            if !enabled {
                self.tracking = None;
                self.highlighted.set(false);
            }
            self.apply_style();
        }
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.set_enabled(enabled);
        self
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlighted.get()
    }

    pub fn set_highlighted(&mut self, highlighted: bool) {
        if self.highlighted.set(highlighted) {
            self.apply_style();
        }
    }

    /// The interaction state colors are resolved for.
    pub fn visual_state(&self) -> VisualState {
        VisualState {
            enabled: self.is_enabled(),
            highlighted: self.is_highlighted(),
        }
    }

    // =========================================================================
    // Environment
    // =========================================================================

    pub fn metrics(&self) -> &ButtonMetrics {
        &self.metrics
    }

    pub fn set_metrics(&mut self, metrics: ButtonMetrics) {
        if self.metrics != metrics {
            self.metrics = metrics;
            self.update_fonts();
        }
    }

    pub fn with_metrics(mut self, metrics: ButtonMetrics) -> Self {
        self.set_metrics(metrics);
        self
    }

    pub fn trait_environment(&self) -> &TraitEnvironment {
        &self.traits
    }

    /// React to a text size or display scale change.
    pub fn set_trait_environment(&mut self, traits: TraitEnvironment) {
        if self.traits != traits {
            self.traits = traits;
            self.update_fonts();
        }
    }

    pub fn with_trait_environment(mut self, traits: TraitEnvironment) -> Self {
        self.set_trait_environment(traits);
        self
    }

    /// Use a different text measurer.
    pub fn set_measurer(&mut self, measurer: Arc<dyn TextMeasurer>) {
        self.measurer = measurer;
        self.invalidate_layout();
    }

    pub fn with_measurer(mut self, measurer: Arc<dyn TextMeasurer>) -> Self {
        self.set_measurer(measurer);
        self
    }

    pub fn title_font(&self) -> &Font {
        &self.title_font
    }

    pub fn subtitle_font(&self) -> &Font {
        &self.subtitle_font
    }

    // =========================================================================
    // Geometry and Layout
    // =========================================================================

    /// The bounds assigned by the parent.
    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    /// Assign bounds. Takes effect on the next layout pass.
    pub fn set_geometry(&mut self, geometry: Rect) {
        if self.geometry != geometry {
            self.geometry = geometry;
            self.frames = None;
        }
    }

    /// Whether the next layout pass has work to do.
    pub fn needs_layout(&self) -> bool {
        self.frames.is_none()
    }

    /// Discard the relationship set and cached frames.
    pub fn invalidate_layout(&mut self) {
        self.engine = None;
        self.frames = None;
    }

    /// The smallest size that fits the current content.
    pub fn size_hint(&mut self) -> Size {
        let engine = self.engine();
        match engine.fitting_size() {
            Ok(size) => size,
            Err(err) => {
                tracing::warn!(target: targets::LAYOUT, %err, "fitting size unavailable");
                Size::ZERO
            }
        }
    }

    /// Run a layout pass if needed and return the frames.
    ///
    /// Repeated calls without property changes return identical frames.
    pub fn layout(&mut self) -> &LayoutFrames {
        let frames = match self.frames {
            Some(frames) => frames,
            None => self.compute_frames(),
        };
        self.frames.insert(frames)
    }

    /// The frames of the last layout pass, if still valid.
    pub fn frames(&self) -> Option<&LayoutFrames> {
        self.frames.as_ref()
    }

    fn engine(&mut self) -> &PillLayout {
        let engine = match self.engine.take() {
            Some(engine) => engine,
            None => {
                let engine = PillLayout::new(
                    self.content_layout(),
                    self.measure_content(),
                    self.metrics,
                    self.traits.device,
                );
                tracing::debug!(
                    target: targets::LAYOUT,
                    mode = %engine.mode(),
                    content = ?engine.content_set(),
                    "regenerated layout relationships"
                );
                engine
            }
        };
        self.engine.insert(engine)
    }

    fn compute_frames(&mut self) -> LayoutFrames {
        let bounds = self.geometry;
        let engine = self.engine();

        let fitting = match engine.fitting_size() {
            Ok(size) => size,
            Err(err) => {
                tracing::warn!(target: targets::LAYOUT, %err, "fitting size unavailable");
                Size::ZERO
            }
        };
        let size = bounds.size.max(fitting);
        if size != bounds.size {
            tracing::debug!(
                target: targets::LAYOUT,
                width = size.width,
                height = size.height,
                "growing button to its fitting size"
            );
        }

        let content = engine.content_set();
        match engine.solve(size) {
            Ok(frames) => {
                tracing::debug!(
                    target: targets::LAYOUT,
                    width = size.width,
                    height = size.height,
                    "layout pass"
                );
                frames.offset(bounds.origin.x, bounds.origin.y)
            }
            Err(err) => {
                tracing::warn!(target: targets::LAYOUT, %err, "layout failed; collapsing content");
                let frame = Rect::from_origin_size(bounds.origin, size);
                let center = Rect::from_origin_size(frame.center(), Size::ZERO);
                LayoutFrames {
                    button: frame,
                    background: frame,
                    content: center,
                    title_guide: center,
                    icon: content.icon.then_some(center),
                    title: content.title.then_some(center),
                    subtitle: content.subtitle.then_some(center),
                }
            }
        }
    }

    fn measure_content(&self) -> ContentMetrics {
        let max_width = self.metrics.max_text_width;
        let block = |text: &str, font: Font| TextBlock {
            extent: self.measurer.measure(text, &font, max_width),
            font,
        };

        ContentMetrics {
            icon_aspect_ratio: self.icon.get().map(IconImage::aspect_ratio),
            title: self.title.get().map(|text| block(text, self.title_font)),
            subtitle: self.subtitle.get().map(|text| block(text, self.subtitle_font)),
            title_font: self.title_font,
        }
    }

    fn update_fonts(&mut self) {
        let (title_font, subtitle_font) = fonts(&self.metrics, &self.traits);
        self.title_font = title_font;
        self.subtitle_font = subtitle_font;
        self.invalidate_layout();
    }

    // =========================================================================
    // Painting
    // =========================================================================

    /// Paint the button, laying it out first if needed.
    pub fn paint(&mut self, painter: &mut impl Painter) {
        let frames = *self.layout();
        let style = self.style;
        let background = RoundedRect::new(frames.background, self.metrics.corner_radius);

        if let Some(color) = style.background {
            painter.fill_rounded_rect(background, color);
        }
        if let Some(color) = style.border {
            painter.stroke_rounded_rect(background, color, self.metrics.border_width);
        }
        if let (Some(icon), Some(rect)) = (self.icon.get(), frames.icon) {
            painter.draw_icon(icon, rect, style.content);
        }
        if let (Some(title), Some(rect)) = (self.title.get(), frames.title) {
            painter.draw_text(title, rect, &self.title_font, style.content);
        }
        if let (Some(subtitle), Some(rect)) = (self.subtitle.get(), frames.subtitle) {
            painter.draw_text(subtitle, rect, &self.subtitle_font, style.content);
        }
    }

    /// Paint into a fresh display list.
    pub fn display_list(&mut self) -> DisplayList {
        let mut list = DisplayList::new();
        self.paint(&mut list);
        list
    }

    fn apply_style(&mut self) {
        self.style = self.colors.resolve(self.visual_state());
        tracing::trace!(target: targets::STYLE, state = ?self.visual_state(), "applied style");
    }

    // =========================================================================
    // Accessibility
    // =========================================================================

    /// Title and subtitle separated by a blank line, omitting absent parts.
    pub fn accessibility_label(&self) -> String {
        [self.title(), self.subtitle()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    // =========================================================================
    // Signals
    // =========================================================================

    /// Signal emitted on primary activation.
    pub fn primary_action(&self) -> &Signal<()> {
        &self.primary_action
    }

    /// Signal emitted when a press begins.
    pub fn pressed(&self) -> &Signal<()> {
        &self.pressed
    }

    /// Signal emitted when a tracked press ends.
    pub fn released(&self) -> &Signal<()> {
        &self.released
    }

    /// Signal emitted when the layout mode changes.
    pub fn content_layout_changed(&self) -> &Signal<ContentLayout> {
        &self.content_layout_changed
    }

    /// Programmatically activate the button.
    pub fn click(&mut self) {
        if !self.is_enabled() {
            return;
        }
        tracing::debug!(target: targets::INPUT, "primary action");
        self.primary_action.emit(());
    }

    // =========================================================================
    // Event Handling
    // =========================================================================

    /// Whether a widget-local point is inside the button.
    pub fn hit_test(&self, local_pos: Point) -> bool {
        let size = self
            .frames
            .map(|frames| frames.button.size)
            .unwrap_or(self.geometry.size);
        Rect::from_origin_size(Point::ZERO, size).contains(local_pos)
    }

    /// Handle a mouse press event.
    ///
    /// Returns `true` if the event was handled.
    pub fn handle_mouse_press(&mut self, event: &MousePressEvent) -> bool {
        if event.button != MouseButton::Left || !self.is_enabled() {
            return false;
        }
        if !self.hit_test(event.local_pos) {
            return false;
        }

        self.tracking = Some(Tracking::Pointer);
        self.set_highlighted(true);
        self.pressed.emit(());
        true
    }

    /// Handle pointer movement during a press.
    ///
    /// Highlighting follows whether the pointer is inside.
    pub fn handle_mouse_move(&mut self, event: &MouseMoveEvent) -> bool {
        if self.tracking != Some(Tracking::Pointer) {
            return false;
        }
        let inside = self.hit_test(event.local_pos);
        self.set_highlighted(inside);
        true
    }

    /// Handle a mouse release event.
    ///
    /// Returns `true` if the event was handled. The primary action fires only
    /// when the release is inside the button.
    pub fn handle_mouse_release(&mut self, event: &MouseReleaseEvent) -> bool {
        if event.button != MouseButton::Left || self.tracking != Some(Tracking::Pointer) {
            return false;
        }

        let inside = self.hit_test(event.local_pos);
        self.tracking = None;
        self.set_highlighted(false);
        self.released.emit(());

        if inside {
            self.click();
        } else {
            tracing::trace!(target: targets::INPUT, "press cancelled outside");
        }
        true
    }

    /// Handle a key press event.
    ///
    /// Space and Enter press the button; Escape cancels a key press.
    pub fn handle_key_press(&mut self, event: &KeyPressEvent) -> bool {
        if !self.is_enabled() {
            return false;
        }

        match event.key {
            Key::Space | Key::Enter => {
                if !event.is_repeat && self.tracking.is_none() {
                    self.tracking = Some(Tracking::Key(event.key));
                    self.set_highlighted(true);
                    self.pressed.emit(());
                }
                true
            }
            Key::Escape if matches!(self.tracking, Some(Tracking::Key(_))) => {
                self.tracking = None;
                self.set_highlighted(false);
                self.released.emit(());
                true
            }
            _ => false,
        }
    }

    /// Handle a key release event.
    ///
    /// Releasing the key that pressed the button triggers the primary action.
    pub fn handle_key_release(&mut self, event: &KeyReleaseEvent) -> bool {
        if self.tracking != Some(Tracking::Key(event.key)) {
            return false;
        }

        self.tracking = None;
        self.set_highlighted(false);
        self.released.emit(());
        self.click();
        true
    }
}

fn fonts(metrics: &ButtonMetrics, traits: &TraitEnvironment) -> (Font, Font) {
    (
        Font::scaled(TextStyle::Body, traits.text_size, metrics.max_text_size),
        Font::scaled(TextStyle::Footnote, traits.text_size, metrics.max_text_size),
    )
}

impl fmt::Debug for PillButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PillButton")
            .field("title", &self.title)
            .field("subtitle", &self.subtitle)
            .field("icon", &self.icon)
            .field("content_layout", &self.content_layout)
            .field("enabled", &self.enabled)
            .field("highlighted", &self.highlighted)
            .field("geometry", &self.geometry)
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "accessibility")]
impl crate::widget::accessibility::Accessible for PillButton {
    fn accessible_role(&self) -> crate::widget::accessibility::AccessibleRole {
        crate::widget::accessibility::AccessibleRole::Button
    }

    fn accessible_name(&self) -> Option<String> {
        Some(self.accessibility_label())
    }

    fn is_accessible_disabled(&self) -> bool {
        !self.is_enabled()
    }

    fn accessible_actions(&self) -> Vec<accesskit::Action> {
        vec![accesskit::Action::Click]
    }
}

static_assertions::assert_impl_all!(PillButton: Send, Sync);
