//! Accessibility support for Capsule widgets.
//!
//! Widgets describe themselves to assistive technology through the
//! [`Accessible`] trait, which builds an [AccessKit](https://accesskit.dev/)
//! node. Embedding applications place those nodes into their platform tree.
//!
//! ```
//! use capsule::widget::accessibility::{Accessible, AccessibleRole};
//! use capsule::widget::widgets::PillButton;
//!
//! let button = PillButton::new().with_title("Save").with_subtitle("to Drive");
//! assert_eq!(button.accessible_role(), AccessibleRole::Button);
//! assert_eq!(button.accessible_name().as_deref(), Some("Save\n\nto Drive"));
//! ```

mod node;
mod role;

pub use node::Accessible;
pub use role::AccessibleRole;
