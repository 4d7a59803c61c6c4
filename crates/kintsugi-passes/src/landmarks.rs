//! Landmark repairs: give the page a `main` region and take the host's
//! stray tab stop off the scroll container.

use kintsugi_dom::Document;

use crate::targets::HostMarkers;

/// Apply the landmark repairs. Returns nodes touched.
pub fn apply(doc: &mut Document, markers: &HostMarkers) -> usize {
    let mut touched = 0;

    if let Some(view) = doc.find_marked(&markers.app_view_marker)
        && doc.attr(view, "role") != Some("main")
        && doc.set_attr(view, "role", "main")
    {
        touched += 1;
    }

    // The host makes its scroll container focusable for no reason; a
    // keyboard user tabs into a giant div that does nothing.
    if let Some(container) = doc.find_marked(&markers.main_container_marker)
        && doc.remove_attr(container, "tabindex")
    {
        touched += 1;
    }

    touched
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sets_main_role_and_strips_tabindex() {
        let mut doc = Document::new();
        let root = doc.root();
        let view = doc.append_element(root, "div").unwrap();
        doc.set_attr(view, "data-app-view", "");
        let container = doc.append_element(view, "div").unwrap();
        doc.set_attr(container, "data-main-container", "");
        doc.set_attr(container, "tabindex", "0");

        let markers = HostMarkers::default();
        assert_eq!(apply(&mut doc, &markers), 2);
        assert_eq!(doc.attr(view, "role"), Some("main"));
        assert!(!doc.has_attr(container, "tabindex"));

        // Second sweep finds nothing left to do.
        assert_eq!(apply(&mut doc, &markers), 0);
    }

    #[test]
    fn test_absent_landmarks_are_skipped() {
        let mut doc = Document::new();
        assert_eq!(apply(&mut doc, &HostMarkers::default()), 0);
    }
}
