//! The Accessible trait for widget accessibility support.

use accesskit::{Action, Node};
use capsule_render::Rect;

use super::role::AccessibleRole;

/// Trait for widgets that provide accessibility information.
///
/// Every method has a default, so a widget only overrides what applies to it.
pub trait Accessible {
    /// The widget's role.
    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Unknown
    }

    /// The name read by screen readers.
    fn accessible_name(&self) -> Option<String> {
        None
    }

    /// Additional description.
    fn accessible_description(&self) -> Option<String> {
        None
    }

    /// Whether the widget is disabled.
    fn is_accessible_disabled(&self) -> bool {
        false
    }

    /// Actions assistive technology may perform.
    fn accessible_actions(&self) -> Vec<Action> {
        Vec::new()
    }

    /// Build an AccessKit node from this widget's accessibility info.
    fn build_accessible_node(&self, bounds: Rect) -> Node {
        let mut node = Node::new(self.accessible_role().to_accesskit_role());

        node.set_bounds(accesskit::Rect {
            x0: bounds.left() as f64,
            y0: bounds.top() as f64,
            x1: bounds.right() as f64,
            y1: bounds.bottom() as f64,
        });

        if let Some(name) = self.accessible_name().filter(|name| !name.is_empty()) {
            node.set_label(name);
        }
        if let Some(description) = self.accessible_description() {
            node.set_description(description);
        }
        if self.is_accessible_disabled() {
            node.set_disabled();
        }
        for action in self.accessible_actions() {
            node.add_action(action);
        }

        node
    }
}
