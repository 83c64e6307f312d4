//! Paint output of widgets.
//!
//! Widgets draw through the [`Painter`] trait. [`DisplayList`] is a painter
//! that records every call as a [`PaintCommand`], which is what tests and
//! headless consumers inspect. A GPU backend implements [`Painter`] directly.

use capsule_render::{Color, Font, IconImage, Rect, RoundedRect};

/// Drawing operations a widget needs.
pub trait Painter {
    /// Fill a rounded rectangle.
    fn fill_rounded_rect(&mut self, rect: RoundedRect, color: Color);

    /// Stroke the outline of a rounded rectangle.
    fn stroke_rounded_rect(&mut self, rect: RoundedRect, color: Color, width: f32);

    /// Draw an icon into `dest`, colorized with `tint`.
    fn draw_icon(&mut self, icon: &IconImage, dest: Rect, tint: Color);

    /// Draw text laid out inside `rect`.
    fn draw_text(&mut self, text: &str, rect: Rect, font: &Font, color: Color);
}

/// A recorded drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    FillRoundedRect {
        rect: RoundedRect,
        color: Color,
    },
    StrokeRoundedRect {
        rect: RoundedRect,
        color: Color,
        width: f32,
    },
    Icon {
        rect: Rect,
        image: IconImage,
        tint: Color,
    },
    Text {
        rect: Rect,
        text: String,
        font: Font,
        color: Color,
    },
}

/// A painter that records commands in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayList {
    commands: Vec<PaintCommand>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[PaintCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Text runs in paint order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|command| match command {
            PaintCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Painter for DisplayList {
    fn fill_rounded_rect(&mut self, rect: RoundedRect, color: Color) {
        self.commands.push(PaintCommand::FillRoundedRect { rect, color });
    }

    fn stroke_rounded_rect(&mut self, rect: RoundedRect, color: Color, width: f32) {
        self.commands
            .push(PaintCommand::StrokeRoundedRect { rect, color, width });
    }

    fn draw_icon(&mut self, icon: &IconImage, dest: Rect, tint: Color) {
        self.commands.push(PaintCommand::Icon {
            rect: dest,
            image: icon.clone(),
            tint,
        });
    }

    fn draw_text(&mut self, text: &str, rect: Rect, font: &Font, color: Color) {
        self.commands.push(PaintCommand::Text {
            rect,
            text: text.to_owned(),
            font: *font,
            color,
        });
    }
}
