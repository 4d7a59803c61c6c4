//! Host capability view — the only way the synchronizer touches the page.
//!
//! The state machine never holds node ids across a timer boundary; the
//! host renders and tears down on its own schedule, so every operation
//! re-resolves its target fresh and treats absence as "do nothing". The
//! trait exists so tests can drive the actor with a scripted host and so a
//! different embedding can supply its own bridge to a live page.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

use kintsugi_dom::{Document, NodeId};

use crate::panel::{Control, Visibility};
use crate::profile::SyncProfile;

/// Attribute the host misplaces on the panel node on every toggle. A
/// write-only signal from our side: read once per reconciliation, then
/// removed so it cannot fight the host's next write.
pub const TRANSIENT_ATTR: &str = "aria-expanded";

/// Attribute owned by the reconciler, and the only panel state external
/// observers may trust.
pub const STABLE_ATTR: &str = "data-expanded";

/// Capability interface between the sync actor and the host page.
pub trait PanelHost {
    /// One-time ARIA setup on the panel and its controls. Reports whether
    /// the panel was present to bind.
    fn install(&self) -> bool;

    /// Current transient attribute value; `None` when the panel or the
    /// attribute is absent. No side effects.
    fn read_transient(&self) -> Option<String>;

    /// Remove the transient attribute from the panel.
    fn clear_transient(&self);

    /// Synchronous optimistic `aria-expanded` on both controls, written at
    /// click time before reconciliation settles.
    fn hint_expanded(&self, expanded: bool);

    /// Write the settled state to the stable attribute.
    fn commit_stable(&self, visibility: Visibility);

    /// Move keyboard focus to a control. Reports whether a target existed.
    fn focus_control(&self, control: Control) -> bool;

    /// Markers and animation timing for this host.
    fn profile(&self) -> &SyncProfile;
}

/// [`PanelHost`] over the in-memory document model.
///
/// Holds the document behind `Rc<RefCell<_>>` — single-threaded sharing
/// with the passes and the embedder. Borrows never span an `.await`.
pub struct DomPanelHost {
    doc: Rc<RefCell<Document>>,
    profile: SyncProfile,
}

impl DomPanelHost {
    pub fn new(doc: Rc<RefCell<Document>>, profile: SyncProfile) -> Self {
        Self { doc, profile }
    }

    fn panel(&self, doc: &Document) -> Option<NodeId> {
        doc.find_marked(&self.profile.panel_marker)
    }

    fn control(&self, doc: &Document, control: Control) -> Option<NodeId> {
        let marker = match control {
            Control::Open => &self.profile.open_control_marker,
            Control::Close => &self.profile.close_control_marker,
        };
        doc.find_marked(marker)
    }
}

impl PanelHost for DomPanelHost {
    fn install(&self) -> bool {
        let mut doc = self.doc.borrow_mut();
        let Some(panel) = self.panel(&doc) else {
            debug!("panel not rendered; skipping binding install");
            return false;
        };

        // The panel needs a stable element id for aria-controls to point at.
        doc.set_attr(panel, "id", &self.profile.panel_element_id);

        if let Some(close) = self.control(&doc, Control::Close) {
            doc.set_attr(close, "aria-label", &self.profile.close_label);
            doc.set_attr(close, "aria-expanded", "true");
            doc.set_attr(close, "aria-controls", &self.profile.panel_element_id);
        }
        if let Some(open) = self.control(&doc, Control::Open) {
            doc.set_attr(open, "aria-label", &self.profile.open_label);
            doc.set_attr(open, "aria-expanded", "false");
            doc.set_attr(open, "aria-controls", &self.profile.panel_element_id);
        }
        true
    }

    fn read_transient(&self) -> Option<String> {
        let doc = self.doc.borrow();
        let panel = self.panel(&doc)?;
        doc.attr(panel, TRANSIENT_ATTR).map(str::to_owned)
    }

    fn clear_transient(&self) {
        let mut doc = self.doc.borrow_mut();
        if let Some(panel) = self.panel(&doc) {
            doc.remove_attr(panel, TRANSIENT_ATTR);
        }
    }

    fn hint_expanded(&self, expanded: bool) {
        let mut doc = self.doc.borrow_mut();
        let value = if expanded { "true" } else { "false" };
        for control in [Control::Open, Control::Close] {
            if let Some(id) = self.control(&doc, control) {
                doc.set_attr(id, "aria-expanded", value);
            }
        }
    }

    fn commit_stable(&self, visibility: Visibility) {
        let mut doc = self.doc.borrow_mut();
        match self.panel(&doc) {
            Some(panel) => {
                doc.set_attr(panel, STABLE_ATTR, visibility.as_stable_value());
                debug!(%visibility, "stable state committed");
            }
            None => debug!(%visibility, "panel gone; commit dropped"),
        }
    }

    fn focus_control(&self, control: Control) -> bool {
        let mut doc = self.doc.borrow_mut();
        match self.control(&doc, control) {
            Some(id) => doc.set_focus(id),
            None => false,
        }
    }

    fn profile(&self) -> &SyncProfile {
        &self.profile
    }
}
