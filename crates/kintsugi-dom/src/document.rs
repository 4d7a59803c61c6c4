//! The document tree: arena storage, queries, and mutation.

use crate::error::DomError;
use crate::node::{Node, NodeId};

/// A mutable element tree with focus tracking.
///
/// Nodes live in an arena and are addressed by [`NodeId`]. Removal marks a
/// whole subtree dead rather than freeing it, so stale ids stay safe to
/// probe — they just answer like the node is gone, which from the caller's
/// point of view it is.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    root: NodeId,
    focused: Option<NodeId>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create a document containing a single `body` root.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new("body")],
            root: NodeId(0),
            focused: None,
        }
    }

    /// The root (`body`) node.
    pub fn root(&self) -> NodeId {
        self.root
    }

    // ========================================================================
    // Node access
    // ========================================================================

    /// Look up a node by id. Removed nodes are still returned so callers
    /// can distinguish "never existed" from "torn down".
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0 as usize)
    }

    fn live(&self, id: NodeId) -> Option<&Node> {
        self.node(id).filter(|n| !n.removed)
    }

    fn live_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0 as usize).filter(|n| !n.removed)
    }

    /// Whether the node exists and is still attached.
    pub fn is_live(&self, id: NodeId) -> bool {
        self.live(id).is_some()
    }

    /// Tag of a live node.
    pub fn tag(&self, id: NodeId) -> Option<&str> {
        self.live(id).map(|n| n.tag())
    }

    /// Attribute value of a live node.
    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.live(id).and_then(|n| n.attr(name))
    }

    /// Whether a live node carries the attribute (value may be empty).
    pub fn has_attr(&self, id: NodeId, name: &str) -> bool {
        self.live(id).map(|n| n.has_attr(name)).unwrap_or(false)
    }

    /// Direct text of a live node.
    pub fn text(&self, id: NodeId) -> Option<&str> {
        self.live(id).and_then(|n| n.text())
    }

    /// Concatenated text of a live node and its descendants, in document
    /// order. Mirrors `textContent`.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        for node_id in self.descendants(id) {
            if let Some(text) = self.text(node_id) {
                out.push_str(text);
            }
        }
        out
    }

    // ========================================================================
    // Structure
    // ========================================================================

    /// Create a detached element. It joins the tree via [`append_child`].
    ///
    /// [`append_child`]: Document::append_child
    pub fn create_element(&mut self, tag: impl Into<String>) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node::new(tag));
        id
    }

    /// Create an element and attach it under `parent` in one step.
    pub fn append_element(
        &mut self,
        parent: NodeId,
        tag: impl Into<String>,
    ) -> Result<NodeId, DomError> {
        let child = self.create_element(tag);
        self.append_child(parent, child)?;
        Ok(child)
    }

    /// Attach `child` as the last child of `parent`, detaching it from any
    /// previous parent first (append-moves, like `appendChild`).
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        self.require_live(parent)?;
        self.require_live(child)?;
        if parent == child || self.ancestors(parent).any(|a| a == child) {
            return Err(DomError::Cycle { parent, child });
        }

        self.detach(child);
        self.nodes[parent.0 as usize].children.push(child);
        self.nodes[child.0 as usize].parent = Some(parent);
        Ok(())
    }

    /// Remove a node and its whole subtree from the tree.
    ///
    /// Focus is cleared if it was inside the removed subtree. Ids into the
    /// subtree stay valid to probe but answer as absent.
    pub fn remove(&mut self, id: NodeId) -> Result<(), DomError> {
        self.require_live(id)?;

        self.detach(id);
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            let node = &mut self.nodes[current.0 as usize];
            node.removed = true;
            stack.extend(node.children.iter().copied());
            if self.focused == Some(current) {
                self.focused = None;
            }
        }
        Ok(())
    }

    fn require_live(&self, id: NodeId) -> Result<(), DomError> {
        match self.node(id) {
            None => Err(DomError::NotFound(id)),
            Some(node) if node.removed => Err(DomError::Removed(id)),
            Some(_) => Ok(()),
        }
    }

    fn detach(&mut self, id: NodeId) {
        if let Some(parent) = self.nodes[id.0 as usize].parent.take() {
            let siblings = &mut self.nodes[parent.0 as usize].children;
            siblings.retain(|c| *c != id);
        }
    }

    /// Parent of a live node.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.live(id).and_then(|n| n.parent)
    }

    /// Children of a live node, in document order.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.live(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    // ========================================================================
    // Attributes, classes, focus
    // ========================================================================

    /// Set an attribute on a live node. Reports whether the write applied;
    /// a vanished node is a no-op, not an error.
    pub fn set_attr(
        &mut self,
        id: NodeId,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> bool {
        match self.live_mut(id) {
            Some(node) => {
                node.attrs.insert(name.into(), value.into());
                true
            }
            None => false,
        }
    }

    /// Remove an attribute. Reports whether the attribute was present on a
    /// live node and got removed.
    pub fn remove_attr(&mut self, id: NodeId, name: &str) -> bool {
        self.live_mut(id)
            .map(|node| node.attrs.shift_remove(name).is_some())
            .unwrap_or(false)
    }

    /// Set the direct text of a live node.
    pub fn set_text(&mut self, id: NodeId, text: impl Into<String>) -> bool {
        match self.live_mut(id) {
            Some(node) => {
                node.text = Some(text.into());
                true
            }
            None => false,
        }
    }

    /// Add a class to a live node. Reports whether the class was newly
    /// added.
    pub fn add_class(&mut self, id: NodeId, class: &str) -> bool {
        let Some(node) = self.live(id) else {
            return false;
        };
        if node.has_class(class) {
            return false;
        }
        let classes = match node.attr("class") {
            Some(existing) if !existing.is_empty() => format!("{existing} {class}"),
            _ => class.to_string(),
        };
        self.set_attr(id, "class", classes)
    }

    /// Remove a class from a live node. Reports whether it was present.
    pub fn remove_class(&mut self, id: NodeId, class: &str) -> bool {
        let Some(node) = self.live(id) else {
            return false;
        };
        if !node.has_class(class) {
            return false;
        }
        let remaining = node
            .attr("class")
            .unwrap_or_default()
            .split_ascii_whitespace()
            .filter(|c| *c != class)
            .collect::<Vec<_>>()
            .join(" ");
        self.set_attr(id, "class", remaining)
    }

    /// Move keyboard focus to a live node. A vanished target is a no-op.
    pub fn set_focus(&mut self, id: NodeId) -> bool {
        if self.is_live(id) {
            self.focused = Some(id);
            true
        } else {
            false
        }
    }

    /// The currently focused node, if any.
    pub fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Ancestors of a node, nearest first. Empty for removed nodes.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let mut current = self.parent(id);
        std::iter::from_fn(move || {
            let next = current?;
            current = self.parent(next);
            Some(next)
        })
    }

    /// Nearest ancestor-or-self matching the predicate. Mirrors `closest`.
    pub fn closest(&self, id: NodeId, pred: impl Fn(&Node) -> bool) -> Option<NodeId> {
        std::iter::once(id)
            .chain(self.ancestors(id))
            .find(|candidate| self.live(*candidate).is_some_and(|n| pred(n)))
    }

    /// A node and its live descendants, depth-first in document order.
    pub fn descendants(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let mut stack = if self.is_live(id) { vec![id] } else { Vec::new() };
        std::iter::from_fn(move || {
            let current = stack.pop()?;
            stack.extend(self.children(current).iter().rev().copied());
            Some(current)
        })
    }

    /// First node in the tree matching the predicate, document order.
    pub fn find(&self, pred: impl Fn(&Node) -> bool) -> Option<NodeId> {
        self.descendants(self.root)
            .find(|id| self.live(*id).is_some_and(|n| pred(n)))
    }

    /// All nodes in the tree matching the predicate, document order.
    pub fn find_all(&self, pred: impl Fn(&Node) -> bool) -> Vec<NodeId> {
        self.descendants(self.root)
            .filter(|id| self.live(*id).is_some_and(|n| pred(n)))
            .collect()
    }

    /// First node carrying the attribute, regardless of value. Marker
    /// attributes are how remediation locates host landmarks.
    pub fn find_marked(&self, marker: &str) -> Option<NodeId> {
        self.find(|n| n.has_attr(marker))
    }

    /// First node whose `id` attribute equals the given value.
    pub fn find_by_element_id(&self, element_id: &str) -> Option<NodeId> {
        self.find(|n| n.attr("id") == Some(element_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (Document, NodeId, NodeId, NodeId) {
        let mut doc = Document::new();
        let header = doc.append_element(doc.root(), "header").unwrap();
        let main = doc.append_element(doc.root(), "main").unwrap();
        let button = doc.append_element(header, "button").unwrap();
        (doc, header, main, button)
    }

    #[test]
    fn test_build_and_query() {
        let (doc, header, main, button) = sample();
        assert_eq!(doc.tag(header), Some("header"));
        assert_eq!(doc.parent(button), Some(header));
        assert_eq!(doc.children(doc.root()), &[header, main]);
        assert_eq!(doc.find(|n| n.tag() == "button"), Some(button));
        assert_eq!(doc.find(|n| n.tag() == "nav"), None);
    }

    #[test]
    fn test_attributes_and_markers() {
        let (mut doc, _, main, _) = sample();
        assert!(doc.set_attr(main, "data-app-view", ""));
        assert!(doc.has_attr(main, "data-app-view"));
        assert_eq!(doc.find_marked("data-app-view"), Some(main));

        assert!(doc.remove_attr(main, "data-app-view"));
        assert!(!doc.remove_attr(main, "data-app-view"));
        assert_eq!(doc.find_marked("data-app-view"), None);
    }

    #[test]
    fn test_classes() {
        let (mut doc, _, main, _) = sample();
        assert!(doc.add_class(main, "darkmode"));
        assert!(!doc.add_class(main, "darkmode"));
        assert!(doc.node(main).unwrap().has_class("darkmode"));

        assert!(doc.add_class(main, "wide"));
        assert!(doc.remove_class(main, "darkmode"));
        assert!(!doc.node(main).unwrap().has_class("darkmode"));
        assert!(doc.node(main).unwrap().has_class("wide"));
    }

    #[test]
    fn test_remove_is_deep_and_final() {
        let (mut doc, header, _, button) = sample();
        doc.remove(header).unwrap();

        assert!(!doc.is_live(header));
        assert!(!doc.is_live(button));
        assert_eq!(doc.attr(button, "anything"), None);
        assert!(!doc.set_attr(button, "x", "y"));
        assert_eq!(doc.remove(header), Err(DomError::Removed(header)));
        // Re-attachment of dead nodes is not a thing the host does.
        let root = doc.root();
        assert_eq!(doc.append_child(root, button), Err(DomError::Removed(button)));
    }

    #[test]
    fn test_append_moves_between_parents() {
        let (mut doc, header, main, button) = sample();
        doc.append_child(main, button).unwrap();
        assert_eq!(doc.parent(button), Some(main));
        assert!(doc.children(header).is_empty());
    }

    #[test]
    fn test_cycle_rejected() {
        let (mut doc, header, _, button) = sample();
        assert_eq!(
            doc.append_child(button, header),
            Err(DomError::Cycle {
                parent: button,
                child: header
            })
        );
        let root = doc.root();
        assert!(matches!(
            doc.append_child(root, root),
            Err(DomError::Cycle { .. })
        ));
    }

    #[test]
    fn test_focus_follows_removal() {
        let (mut doc, header, _, button) = sample();
        assert!(doc.set_focus(button));
        assert_eq!(doc.focused(), Some(button));

        doc.remove(header).unwrap();
        assert_eq!(doc.focused(), None);
        assert!(!doc.set_focus(button));
    }

    #[test]
    fn test_text_content_walks_subtree() {
        let (mut doc, header, _, button) = sample();
        doc.set_text(header, "Jump ");
        let span = doc.append_element(button, "span").unwrap();
        doc.set_text(button, "to ");
        doc.set_text(span, "content");
        assert_eq!(doc.text_content(header), "Jump to content");
    }

    #[test]
    fn test_closest() {
        let (mut doc, header, _, button) = sample();
        doc.set_attr(header, "level", "1");
        assert_eq!(doc.closest(button, |n| n.has_attr("level")), Some(header));
        assert_eq!(doc.closest(button, |n| n.tag() == "button"), Some(button));
        assert_eq!(doc.closest(button, |n| n.tag() == "nav"), None);
    }
}
