//! In-memory document model for Kintsugi.
//!
//! This crate is the shared medium everything else operates on: a mutable
//! element tree standing in for the host-rendered page. The remediation
//! passes and the panel synchronizer never hold live references into the
//! host UI — they read and write *this* tree, and an embedder mirrors it
//! out to whatever is actually on screen.
//!
//! Two policies shape the API, both inherited from the problem domain
//! (patching a page we do not own, whose nodes appear and vanish on the
//! host's schedule):
//!
//! - **Lookups are explicit.** Every query returns `Option<NodeId>`. There
//!   is no panicking index and no implicit "current" node. Callers decide
//!   what absence means, and they re-resolve ids fresh on each invocation
//!   rather than caching them across host repaints.
//! - **Attribute mutations are defensive.** Setting an attribute, class, or
//!   focus on a node that has since been removed reports `false` and does
//!   nothing. Structural mistakes an embedder can actually make — attaching
//!   a node under its own descendant, appending to a removed parent — are
//!   real errors and return [`DomError`].

pub mod document;
pub mod error;
pub mod node;

pub use document::Document;
pub use error::DomError;
pub use node::{Node, NodeId};
