//! Navigation tree node.

use serde::{Deserialize, Serialize};

/// One entry in the sidebar navigation tree.
///
/// Built fresh per request and never persisted. Sibling order is
/// significant for rendering and is preserved through pruning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    /// Display label. Also the key into the label→module table.
    pub label: String,
    /// Icon identifier for the client to render.
    pub icon: String,
    /// Route path the entry links to.
    pub path: String,
    /// Optional badge count (e.g., unread notifications).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<u32>,
    /// Child entries. Empty for leaves.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavItem>,
}

impl NavItem {
    /// Create a leaf entry.
    #[must_use]
    pub fn leaf(label: &str, icon: &str, path: &str) -> Self {
        Self {
            label: label.to_owned(),
            icon: icon.to_owned(),
            path: path.to_owned(),
            badge: None,
            children: Vec::new(),
        }
    }

    /// Create a group entry with children.
    #[must_use]
    pub fn group(label: &str, icon: &str, path: &str, children: Vec<Self>) -> Self {
        Self {
            label: label.to_owned(),
            icon: icon.to_owned(),
            path: path.to_owned(),
            badge: None,
            children,
        }
    }

    /// Whether this entry has no children.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}
