//! Keep links in the current tab.
//!
//! The host opens every external link in a new tab, which strands screen
//! reader and keyboard users in a window with no history. Strip the
//! behavior except where a link explicitly opts back in.

use kintsugi_dom::Document;

/// Attribute a link sets to keep its new-tab behavior.
pub const OPT_IN_ATTR: &str = "data-newtab";

/// Remove `target="_blank"` from non-opted-in links. Returns nodes touched.
pub fn apply(doc: &mut Document) -> usize {
    let links = doc.find_all(|n| n.attr("target") == Some("_blank") && !n.has_attr(OPT_IN_ATTR));
    let mut touched = 0;
    for link in links {
        if doc.remove_attr(link, "target") {
            touched += 1;
        }
    }
    touched
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_new_tab_targets() {
        let mut doc = Document::new();
        let root = doc.root();
        let plain = doc.append_element(root, "a").unwrap();
        doc.set_attr(plain, "target", "_blank");
        let opted = doc.append_element(root, "a").unwrap();
        doc.set_attr(opted, "target", "_blank");
        doc.set_attr(opted, OPT_IN_ATTR, "");
        let framed = doc.append_element(root, "a").unwrap();
        doc.set_attr(framed, "target", "viewer");

        assert_eq!(apply(&mut doc), 1);
        assert!(!doc.has_attr(plain, "target"));
        assert_eq!(doc.attr(opted, "target"), Some("_blank"));
        assert_eq!(doc.attr(framed, "target"), Some("viewer"));

        assert_eq!(apply(&mut doc), 0);
    }
}
