//! Logging targets for the widget crate.
//!
//! See `capsule_core::logging` for subscriber setup.

/// Target names for log filtering.
pub mod targets {
    /// Layout passes and relationship generation.
    pub const LAYOUT: &str = "capsule::layout";
    /// The linear constraint solver.
    pub const SOLVER: &str = "capsule::layout::solver";
    /// Visual state resolution.
    pub const STYLE: &str = "capsule::style";
    /// Archive encoding and decoding.
    pub const ARCHIVE: &str = "capsule::archive";
    /// Pointer and keyboard handling.
    pub const INPUT: &str = "capsule::input";
    /// The layout selector demo.
    pub const DEMO: &str = "capsule::demo";
}
