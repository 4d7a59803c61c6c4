//! Accessible names for heading anchor links.
//!
//! The host decorates every heading with a bare `#` anchor link; screen
//! readers announce it as "link" with no hint of where it goes. Label each
//! one with the heading's own text.

use kintsugi_dom::{Document, Node};

const HEADING_TAGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

fn is_heading(node: &Node) -> bool {
    // The host marks generated heading containers with a `level`
    // attribute; hand-written headings use real tags.
    node.has_attr("level") || HEADING_TAGS.contains(&node.tag())
}

/// Label every anchor that lives inside a heading. Returns nodes touched.
pub fn apply(doc: &mut Document) -> usize {
    let mut touched = 0;
    for link in doc.find_all(|n| n.tag() == "a") {
        let Some(heading) = doc.closest(link, is_heading) else {
            continue;
        };
        let label = format!("Jump to: {}", doc.text_content(heading));
        if doc.attr(link, "aria-label") != Some(label.as_str())
            && doc.set_attr(link, "aria-label", label)
        {
            touched += 1;
        }
    }
    touched
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_heading_links() {
        let mut doc = Document::new();
        let root = doc.root();

        let heading = doc.append_element(root, "div").unwrap();
        doc.set_attr(heading, "level", "2");
        doc.set_text(heading, "Results");
        let anchor = doc.append_element(heading, "a").unwrap();

        let h1 = doc.append_element(root, "h1").unwrap();
        doc.set_text(h1, "Report");
        let h1_anchor = doc.append_element(h1, "a").unwrap();

        // A link outside any heading keeps whatever it had.
        let stray = doc.append_element(root, "a").unwrap();

        assert_eq!(apply(&mut doc), 2);
        assert_eq!(doc.attr(anchor, "aria-label"), Some("Jump to: Results"));
        assert_eq!(doc.attr(h1_anchor, "aria-label"), Some("Jump to: Report"));
        assert_eq!(doc.attr(stray, "aria-label"), None);

        assert_eq!(apply(&mut doc), 0);
    }
}
