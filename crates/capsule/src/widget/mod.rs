//! Widget system for Capsule.
//!
//! This module provides:
//!
//! - [`widgets::PillButton`] and the layout selector demo
//! - [`layout`]: relationship generation and the constraint solver
//! - [`style`]: color resolution for interaction states
//! - [`paint`]: the [`Painter`] trait and a recording [`DisplayList`]
//! - [`events`]: pointer and keyboard input
//!
//! Widgets are plain owned values. A layout pass is deferred until geometry
//! is asked for, so any number of property changes cost one solve.

#[cfg(feature = "accessibility")]
pub mod accessibility;
pub mod events;
pub mod layout;
pub mod paint;
pub mod slot;
pub mod style;
pub mod widgets;

pub use events::{
    EventBase, Key, KeyPressEvent, KeyReleaseEvent, MouseButton, MouseMoveEvent, MousePressEvent,
    MouseReleaseEvent,
};
pub use paint::{DisplayList, PaintCommand, Painter};
pub use slot::Slot;
pub use style::{ButtonColors, ResolvedStyle, VisualState};
