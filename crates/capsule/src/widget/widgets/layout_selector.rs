//! A demo screen that switches a [`PillButton`] between its layouts.
//!
//! A row of four [`ModeControl`]s, one per [`ContentLayout`], sits next to a
//! single button. Selecting a control changes the button's layout and marks
//! the control as selected by tinting it with the label color.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use capsule_render::Color;

use super::PillButton;
use crate::logging::targets;
use crate::widget::layout::ContentLayout;

/// One mode-picker control in the selector row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModeControl {
    mode: ContentLayout,
    tint: Option<Color>,
}

impl ModeControl {
    fn new(mode: ContentLayout) -> Self {
        Self { mode, tint: None }
    }

    /// The layout this control selects.
    pub fn mode(&self) -> ContentLayout {
        self.mode
    }

    /// The tint set on this control; `None` inherits from the screen.
    pub fn tint(&self) -> Option<Color> {
        self.tint
    }

    /// The tint after inheritance.
    pub fn effective_tint(&self, inherited: Color) -> Color {
        self.tint.unwrap_or(inherited)
    }
}

/// The row of mode-picker controls.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutSelector {
    controls: [ModeControl; 4],
    view_tint: Color,
    selected: Option<ContentLayout>,
}

impl LayoutSelector {
    /// Tint given to the selected control.
    pub const SELECTED_TINT: Color = Color::LABEL;

    /// A row of controls in [`ContentLayout::ALL`] order, none selected.
    pub fn new(view_tint: Color) -> Self {
        Self {
            controls: ContentLayout::ALL.map(ModeControl::new),
            view_tint,
            selected: None,
        }
    }

    pub fn controls(&self) -> &[ModeControl] {
        &self.controls
    }

    pub fn control(&self, index: usize) -> Option<&ModeControl> {
        self.controls.get(index)
    }

    /// The screen tint unselected controls show.
    pub fn view_tint(&self) -> Color {
        self.view_tint
    }

    /// The mode a control index stands for. Unknown indices pick horizontal.
    pub fn mode_for_index(index: usize) -> ContentLayout {
        ContentLayout::from_index(index).unwrap_or_default()
    }

    /// The control currently carrying the selected tint.
    pub fn selected(&self) -> Option<ContentLayout> {
        self.selected
    }

    /// Move the selected tint to `next`.
    ///
    /// Only the previously selected control and `next` change.
    pub fn mark_selected(&mut self, next: ContentLayout) {
        if let Some(previous) = self.selected.replace(next) {
            self.controls[previous.index()].tint = Some(self.view_tint);
        }
        self.controls[next.index()].tint = Some(Self::SELECTED_TINT);
    }
}

impl Default for LayoutSelector {
    fn default() -> Self {
        Self::new(Color::SYSTEM_BLUE)
    }
}

/// The demo screen: one button and the selector that drives it.
pub struct LayoutSelectorDemo {
    button: PillButton,
    selector: LayoutSelector,
    activations: Arc<AtomicUsize>,
}

impl LayoutSelectorDemo {
    /// Build the screen around `button` and show the horizontal layout.
    pub fn new(button: PillButton, view_tint: Color) -> Self {
        let activations = Arc::new(AtomicUsize::new(0));
        let counter = activations.clone();
        button.primary_action().connect(move |_| {
            let count = counter.fetch_add(1, Ordering::SeqCst) + 1;
            tracing::info!(target: targets::DEMO, count, "button activated");
        });

        let mut demo = Self {
            button,
            selector: LayoutSelector::new(view_tint),
            activations,
        };
        demo.show_content_layout(ContentLayout::Horizontal);
        demo
    }

    pub fn button(&self) -> &PillButton {
        &self.button
    }

    pub fn button_mut(&mut self) -> &mut PillButton {
        &mut self.button
    }

    pub fn selector(&self) -> &LayoutSelector {
        &self.selector
    }

    /// How many times the button's primary action fired.
    pub fn activation_count(&self) -> usize {
        self.activations.load(Ordering::SeqCst)
    }

    /// Handle a tap on the control at `index`.
    pub fn select(&mut self, index: usize) {
        let mode = LayoutSelector::mode_for_index(index);
        if ContentLayout::from_index(index).is_none() {
            tracing::debug!(target: targets::DEMO, index, "unknown control; showing horizontal");
        }
        self.show_content_layout(mode);
    }

    /// Switch the button to `mode` and update the selected indicator.
    pub fn show_content_layout(&mut self, mode: ContentLayout) {
        let previous = self.button.content_layout();
        self.selector.mark_selected(mode);
        self.button.set_content_layout(mode);
        tracing::debug!(target: targets::DEMO, %previous, %mode, "selected layout");
    }

    /// Move the indicator to the button's current layout.
    ///
    /// Needed after changing the layout through [`button_mut`](Self::button_mut).
    pub fn sync_selection(&mut self) {
        let mode = self.button.content_layout();
        if self.selector.selected() != Some(mode) {
            self.selector.mark_selected(mode);
        }
    }
}

impl Default for LayoutSelectorDemo {
    fn default() -> Self {
        let button = PillButton::new()
            .with_title("Title")
            .with_subtitle("Subtitle")
            .with_border_color(Color::SYSTEM_BLUE);
        Self::new(button, Color::SYSTEM_BLUE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEW_TINT: Color = Color::SYSTEM_BLUE;

    #[test]
    fn starts_with_horizontal_selected() {
        let demo = LayoutSelectorDemo::default();
        assert_eq!(demo.button().content_layout(), ContentLayout::Horizontal);

        let tints: Vec<_> = demo.selector().controls().iter().map(ModeControl::tint).collect();
        assert_eq!(tints, vec![Some(Color::LABEL), None, None, None]);
    }

    #[test]
    fn select_moves_the_indicator() {
        let mut demo = LayoutSelectorDemo::default();
        demo.select(2);

        assert_eq!(demo.button().content_layout(), ContentLayout::Vertical);
        let selector = demo.selector();
        assert_eq!(selector.controls()[0].tint(), Some(VIEW_TINT));
        assert_eq!(selector.controls()[1].tint(), None);
        assert_eq!(selector.controls()[2].tint(), Some(Color::LABEL));
        assert_eq!(selector.controls()[3].tint(), None);
        assert_eq!(selector.controls()[1].effective_tint(VIEW_TINT), VIEW_TINT);
    }

    #[test]
    fn unknown_index_falls_back_to_horizontal() {
        let mut demo = LayoutSelectorDemo::default();
        demo.select(3);
        demo.select(7);

        assert_eq!(demo.button().content_layout(), ContentLayout::Horizontal);
        assert_eq!(demo.selector().controls()[0].tint(), Some(Color::LABEL));
        assert_eq!(demo.selector().controls()[3].tint(), Some(VIEW_TINT));
    }

    #[test]
    fn indicator_tracks_selection_not_button_mode() {
        let mut demo = LayoutSelectorDemo::default();
        demo.button_mut().set_content_layout(ContentLayout::VerticalReversed);
        demo.select(2);

        let tints: Vec<_> = demo.selector().controls().iter().map(ModeControl::tint).collect();
        assert_eq!(tints, vec![Some(VIEW_TINT), None, Some(Color::LABEL), None]);
        assert_eq!(demo.selector().selected(), Some(ContentLayout::Vertical));
    }

    #[test]
    fn sync_selection_follows_external_mode_change() {
        let mut demo = LayoutSelectorDemo::default();
        demo.button_mut().set_content_layout(ContentLayout::HorizontalReversed);
        demo.sync_selection();

        let selected: Vec<_> = demo
            .selector()
            .controls()
            .iter()
            .filter(|control| control.tint() == Some(Color::LABEL))
            .map(ModeControl::mode)
            .collect();
        assert_eq!(selected, vec![ContentLayout::HorizontalReversed]);
    }

    #[test]
    fn controls_follow_mode_order() {
        let selector = LayoutSelector::default();
        for (index, control) in selector.controls().iter().enumerate() {
            assert_eq!(control.mode().index(), index);
        }
    }

    #[test]
    fn primary_action_is_counted() {
        let mut demo = LayoutSelectorDemo::default();
        demo.button_mut().click();
        demo.button_mut().click();
        assert_eq!(demo.activation_count(), 2);
    }
}
