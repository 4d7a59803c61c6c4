//! One-shot accessibility remediation passes.
//!
//! Everything here is the simple side of Kintsugi: single-sweep document
//! annotations that repair what the host rendered wrong. Passes share only
//! the document with the panel synchronizer — no channels, no timers, no
//! coordination. Each pass is idempotent (a second run changes nothing)
//! and returns how many nodes it actually touched, which is all the
//! embedder needs for logging.
//!
//! The missing-element policy matches the rest of the system: a node the
//! host didn't render is skipped silently. These passes annotate pages,
//! they don't validate them.

pub mod headings;
pub mod landmarks;
pub mod links;
pub mod menu;
pub mod targets;
pub mod theme;

pub use targets::HostMarkers;
pub use theme::ThemePreference;

use kintsugi_dom::Document;
use tracing::info;

/// Run every startup pass once, in document-safe order.
///
/// The menu dropdown pass is not included: the dropdown only exists after
/// the menu opens, so [`menu::prepare_dropdown`] runs on the embedder's
/// schedule instead.
pub fn apply_startup(
    doc: &mut Document,
    markers: &HostMarkers,
    theme: ThemePreference,
) -> usize {
    let touched = landmarks::apply(doc, markers)
        + menu::annotate_button(doc, markers)
        + headings::apply(doc)
        + links::apply(doc)
        + theme::apply(doc, theme);
    info!(touched, "startup remediation passes applied");
    touched
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_startup_is_idempotent() {
        let mut doc = Document::new();
        let root = doc.root();
        let view = doc.append_element(root, "div").unwrap();
        doc.set_attr(view, "data-app-view", "");
        let button = doc.append_element(root, "button").unwrap();
        doc.set_attr(button, "data-menu-button", "");
        let link = doc.append_element(root, "a").unwrap();
        doc.set_attr(link, "target", "_blank");

        let markers = HostMarkers::default();
        let first = apply_startup(&mut doc, &markers, ThemePreference::Dark);
        assert!(first > 0);
        assert_eq!(apply_startup(&mut doc, &markers, ThemePreference::Dark), 0);
    }
}
