//! Element nodes and their ids.

use indexmap::IndexMap;

/// Arena index of a node within its [`Document`](crate::Document).
///
/// Ids are cheap to copy and never reused, but they go stale: a node the
/// host has torn down stays addressable and simply reports itself removed.
/// Callers that span host repaints should re-resolve by query instead of
/// holding ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

/// A single element: tag, ordered attributes, optional text.
///
/// Nodes are only handed out as shared references from query predicates;
/// all mutation goes through [`Document`](crate::Document) so tree
/// invariants stay in one place.
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) tag: String,
    pub(crate) attrs: IndexMap<String, String>,
    pub(crate) text: Option<String>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) removed: bool,
}

impl Node {
    pub(crate) fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: IndexMap::new(),
            text: None,
            parent: None,
            children: Vec::new(),
            removed: false,
        }
    }

    /// Element tag, lowercase by convention.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Attribute value, if present.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(|v| v.as_str())
    }

    /// Whether the attribute is present at all (value may be empty).
    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.contains_key(name)
    }

    /// Direct text content of this node (not descendants).
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Whether the `class` attribute contains the given class.
    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .map(|classes| classes.split_ascii_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    /// Whether this node is still attached to the document tree.
    pub fn is_removed(&self) -> bool {
        self.removed
    }
}
