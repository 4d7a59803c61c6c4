//! Top menu repairs.
//!
//! The host's menu button has no accessible name and no expanded state,
//! and the dropdown it spawns is rendered at the end of the document —
//! outside the tab order, full of focusable containers that shouldn't be,
//! with items that look like buttons but aren't.
//!
//! Annotation is one-shot at startup. The dropdown only exists after the
//! menu opens, so [`prepare_dropdown`] is a separate entry point the
//! embedder invokes once the host has rendered it (the reference host
//! needs about 200ms).

use kintsugi_dom::{Document, NodeId};
use tracing::debug;

use crate::targets::HostMarkers;

/// Give the menu button an accessible name and toggle semantics.
/// Returns nodes touched.
pub fn annotate_button(doc: &mut Document, markers: &HostMarkers) -> usize {
    let Some(button) = doc.find_marked(&markers.menu_button_marker) else {
        debug!("menu button not rendered; skipping annotation");
        return 0;
    };

    let mut changed = false;
    changed |= set_if_differs(doc, button, "aria-label", "Menu");
    if !doc.has_attr(button, "aria-expanded") {
        changed |= doc.set_attr(button, "aria-expanded", "false");
    }
    changed |= set_if_differs(doc, button, "aria-controls", &markers.menu_dropdown_id);
    changed as usize
}

/// Flip the menu button's expanded state in response to a click.
///
/// Collapsing also removes the dropdown, matching what the host's own
/// close path does visually. Returns the new expanded state, or `None`
/// when there is no menu button to toggle. On `Some(true)` the embedder
/// should schedule [`prepare_dropdown`] for after the host renders the
/// dropdown.
pub fn toggle_expanded(doc: &mut Document, markers: &HostMarkers) -> Option<bool> {
    let button = doc.find_marked(&markers.menu_button_marker)?;
    let expanded = doc.attr(button, "aria-expanded") == Some("true");

    if expanded {
        doc.set_attr(button, "aria-expanded", "false");
        if let Some(dropdown) = doc.find_by_element_id(&markers.menu_dropdown_id) {
            let _ = doc.remove(dropdown);
        }
        Some(false)
    } else {
        doc.set_attr(button, "aria-expanded", "true");
        Some(true)
    }
}

/// Repair the freshly-rendered dropdown. Returns nodes touched.
///
/// Reparents the dropdown under the page header so tab order follows
/// reading order, removes the host's focus trap, gives menu items button
/// semantics (except developer-only items), strips focusable list
/// containers, and puts focus back on the toggle button.
pub fn prepare_dropdown(doc: &mut Document, markers: &HostMarkers) -> usize {
    let Some(dropdown) = doc.find_by_element_id(&markers.menu_dropdown_id) else {
        debug!("menu dropdown not rendered; nothing to prepare");
        return 0;
    };

    let mut touched = 0;

    // Move the dropdown to where keyboard users expect it.
    if let Some(header) = doc.find(|n| n.tag() == "header")
        && doc.parent(dropdown) != Some(header)
        && doc.append_child(header, dropdown).is_ok()
    {
        touched += 1;
    }

    // The host parks an overlay that swallows focus moves.
    if let Some(trap) = doc.find_marked(&markers.focus_trap_marker)
        && doc.remove(trap).is_ok()
    {
        touched += 1;
    }

    for item in menu_item_labels(doc, dropdown) {
        if doc.text_content(item) == markers.developer_item_label {
            continue;
        }
        let mut changed = false;
        changed |= set_if_differs(doc, item, "role", "button");
        changed |= set_if_differs(doc, item, "tabindex", "0");
        touched += changed as usize;
    }

    // List containers are not tab stops.
    for list in doc.find_all(|n| n.tag() == "ul" && n.has_attr("tabindex")) {
        if doc.closest(list, |n| n.attr("id") == Some(markers.menu_dropdown_id.as_str()))
            == Some(dropdown)
            && doc.remove_attr(list, "tabindex")
        {
            touched += 1;
        }
    }

    // Keep focus on the toggle button through the reshuffle.
    if let Some(button) = doc.find_marked(&markers.menu_button_marker)
        && doc.focused() != Some(button)
        && doc.set_focus(button)
    {
        touched += 1;
    }

    touched
}

/// First `span` child of each `li` in the dropdown — where the host puts
/// the item's label.
fn menu_item_labels(doc: &Document, dropdown: NodeId) -> Vec<NodeId> {
    doc.descendants(dropdown)
        .filter(|id| doc.tag(*id) == Some("li"))
        .filter_map(|li| doc.children(li).first().copied())
        .filter(|first| doc.tag(*first) == Some("span"))
        .collect()
}

fn set_if_differs(doc: &mut Document, id: NodeId, name: &str, value: &str) -> bool {
    if doc.attr(id, name) == Some(value) {
        return false;
    }
    doc.set_attr(id, name, value)
}
