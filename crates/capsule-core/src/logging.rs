//! Logging facilities for Capsule.
//!
//! Capsule uses the `tracing` crate for instrumentation and never installs a
//! subscriber itself. Applications pick one, for example:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("capsule=debug,capsule_core=info")
//!     .init();
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "capsule_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "capsule_core::signal";
    /// Property system target.
    pub const PROPERTY: &str = "capsule_core::property";
}
