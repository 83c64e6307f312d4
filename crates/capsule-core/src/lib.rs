//! Core systems for Capsule.
//!
//! This crate provides the small reactive layer the Capsule widgets are built on:
//!
//! - **Signal/Slot System**: Type-safe notification of interested parties
//! - **Property System**: Values with change detection
//! - **Logging**: `tracing` target names for per-subsystem filtering
//!
//! Everything here is synchronous. Widgets live on the thread that owns the
//! user interface and every slot runs on the emitting thread.
//!
//! # Example
//!
//! ```
//! use capsule_core::{Property, Signal};
//!
//! struct Counter {
//!     value: Property<i32>,
//!     value_changed: Signal<i32>,
//! }
//!
//! impl Counter {
//!     fn increment(&self) {
//!         let new_value = self.value.get() + 1;
//!         if self.value.set(new_value) {
//!             self.value_changed.emit(new_value);
//!         }
//!     }
//! }
//!
//! let counter = Counter {
//!     value: Property::new(0),
//!     value_changed: Signal::new(),
//! };
//! counter.value_changed.connect(|value| println!("now {value}"));
//! counter.increment();
//! ```

pub mod logging;
pub mod property;
pub mod signal;

pub use property::Property;
pub use signal::{ConnectionId, Signal};
