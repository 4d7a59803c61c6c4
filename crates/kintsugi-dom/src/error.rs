//! Error types for document mutations.

use thiserror::Error;

use crate::node::NodeId;

/// Errors from structural document operations.
///
/// Only mutations that indicate an embedder bug produce these. Plain
/// attribute writes against vanished nodes are the host's fault, not the
/// caller's, and report `false` instead (see [`crate::Document`]).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomError {
    /// The id does not belong to this document.
    #[error("node not found in document: {0:?}")]
    NotFound(NodeId),

    /// The node was removed from the tree and cannot be a structural target.
    #[error("node has been removed from the tree: {0:?}")]
    Removed(NodeId),

    /// Attaching the child would create a cycle.
    #[error("cannot attach {child:?} beneath its own descendant {parent:?}")]
    Cycle { parent: NodeId, child: NodeId },
}
