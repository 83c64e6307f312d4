//! Constraint-based layout for the pill button.
//!
//! This module provides:
//!
//! - [`Constraint`], [`Expression`], [`Strength`]: linear relationships over
//!   the edges of [`LayoutItem`]s
//! - [`solve`]: a simplex solver for a relationship set
//! - [`PillLayout`]: generates the relationship set for a [`ContentLayout`]
//!   and a [`ContentSet`]
//!
//! # Layout Algorithm
//!
//! A layout pass runs in two steps:
//!
//! 1. **Fitting pass**: solve with the button size free and weakly hugged to
//!    zero. The result is the smallest size every relationship allows.
//! 2. **Placement pass**: solve again with the button fixed to the larger of
//!    the available bounds and the fitting size.
//!
//! Both passes regenerate the relationships from the current inputs.
//!
//! # Example
//!
//! ```
//! use capsule::config::ButtonMetrics;
//! use capsule::render::{DeviceMetrics, Font, TextSizeCategory, TextStyle};
//! use capsule::widget::layout::{ContentLayout, ContentMetrics, PillLayout};
//!
//! let font = Font::preferred(TextStyle::Body, TextSizeCategory::Large);
//! let layout = PillLayout::new(
//!     ContentLayout::Vertical,
//!     ContentMetrics::empty(font),
//!     ButtonMetrics::default(),
//!     DeviceMetrics::default(),
//! );
//!
//! let size = layout.fitting_size().unwrap();
//! let frames = layout.solve(size).unwrap();
//! assert!(frames.button.contains_rect(&frames.content, 1e-3));
//! ```

mod constraint;
mod pill_layout;
mod solver;

pub use constraint::{
    Constraint, ConstraintSet, Edge, Expression, LayoutItem, Relation, Strength, Variable,
};
pub use pill_layout::{
    ContentLayout, ContentMetrics, ContentSet, LayoutFrames, PillLayout, Sizing, TextBlock,
};
pub use solver::{SolveError, SolveResult, Solution, solve};
