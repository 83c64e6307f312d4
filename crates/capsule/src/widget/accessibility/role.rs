//! Accessibility roles for widgets.

use accesskit::Role;

/// The accessibility role of a widget.
///
/// A small set of roles mapped onto AccessKit's [`Role`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum AccessibleRole {
    /// A generic widget with no specific role.
    #[default]
    Unknown,
    /// A push button.
    Button,
    /// A static text label.
    Label,
    /// An image.
    Image,
    /// A group of related controls.
    Group,
}

impl AccessibleRole {
    /// Convert to the AccessKit role.
    pub fn to_accesskit_role(self) -> Role {
        match self {
            AccessibleRole::Unknown => Role::Unknown,
            AccessibleRole::Button => Role::Button,
            AccessibleRole::Label => Role::Label,
            AccessibleRole::Image => Role::Image,
            AccessibleRole::Group => Role::Group,
        }
    }
}
