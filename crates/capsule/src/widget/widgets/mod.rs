//! Widgets.
//!
//! - [`PillButton`]: a rounded button with an optional icon, title and subtitle
//! - [`LayoutSelectorDemo`]: a screen that cycles a button through its layouts

mod layout_selector;
mod pill_button;

pub use layout_selector::{LayoutSelector, LayoutSelectorDemo, ModeControl};
pub use pill_button::PillButton;
