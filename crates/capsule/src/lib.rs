//! Capsule - a pill-shaped button control with a constraint-solved layout.
//!
//! This is the main crate. It re-exports the reactive core and exposes the
//! rendering value types under [`render`].
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
//!     .with_tint_color(Color::RED)
//!     .with_content_layout(ContentLayout::HorizontalReversed);
//!
//! let list = button.display_list();
//! assert_eq!(list.texts().collect::<Vec<_>>(), vec!["Save"]);
//! ```

pub use capsule_core::*;

/// Geometry, color, text and icon types.
pub mod render {
    pub use capsule_render::*;
}

pub mod archive;
pub mod config;
pub mod logging;
pub mod widget;
