//! Abstract view tree.
//!
//! A [`ViewNode`] is a role-tagged tree node with optional text, a flat
//! attribute list, and children. Roles are dotted lowercase paths
//! (`"hero.title"`, `"stat.value"`); attributes carry non-textual
//! payload such as icon glyphs and navigation targets.

use serde::Serialize;

/// One node in a view tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewNode {
    /// Role tag consumed by the presentation layer.
    pub role: String,
    /// Text payload, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Attribute pairs (icon glyphs, target page identifiers, ...).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attrs: Vec<(String, String)>,
    /// Child nodes, in presentation order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ViewNode>,
}

impl ViewNode {
    /// Create an empty node with the given role.
    #[must_use]
    pub fn new(role: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            text: None,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Create a text leaf.
    #[must_use]
    pub fn text(role: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(role).with_text(text)
    }

    /// Set the text payload.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Append an attribute pair.
    #[must_use]
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((key.into(), value.into()));
        self
    }

    /// Append a child node.
    #[must_use]
    pub fn with_child(mut self, child: ViewNode) -> Self {
        self.children.push(child);
        self
    }

    /// Append several child nodes.
    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = ViewNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Look up an attribute value by key.
    #[must_use]
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// The rendered form of a page document.
///
/// `title` is the display/browser title; `nodes` are the top-level
/// sections in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewDescription {
    /// Display string for the browser title.
    pub title: String,
    /// Top-level view nodes.
    pub nodes: Vec<ViewNode>,
}

impl ViewDescription {
    /// Create a view with the given title and no nodes.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            nodes: Vec::new(),
        }
    }

    /// Append a top-level node.
    #[must_use]
    pub fn with_node(mut self, node: ViewNode) -> Self {
        self.nodes.push(node);
        self
    }

    /// Collect every node in the tree with the given role, depth-first.
    #[must_use]
    pub fn find_all(&self, role: &str) -> Vec<&ViewNode> {
        let mut found = Vec::new();
        let mut stack: Vec<&ViewNode> = self.nodes.iter().rev().collect();
        while let Some(node) = stack.pop() {
            if node.role == role {
                found.push(node);
            }
            stack.extend(node.children.iter().rev());
        }
        found
    }

    /// First node in the tree with the given role, depth-first.
    #[must_use]
    pub fn find_first(&self, role: &str) -> Option<&ViewNode> {
        self.find_all(role).into_iter().next()
    }
}
