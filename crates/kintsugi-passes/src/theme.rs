//! Mirror the host's theme choice onto the document body.
//!
//! The remediation stylesheets key off a `darkmode` body class; the host
//! only records its theme in a preference store. This pass is re-runnable:
//! the embedder calls it again whenever the theme switcher is used.

use kintsugi_dom::Document;
use strum::{Display, EnumString};

/// The host's active theme, as read from its preference store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    /// Parse the host's stored theme name; anything unrecognized is the
    /// light default.
    pub fn from_host_name(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }
}

/// Body class the remediation stylesheets select on.
pub const DARKMODE_CLASS: &str = "darkmode";

/// Sync the body class with the preference. Returns nodes touched
/// (0 when the class already matched).
pub fn apply(doc: &mut Document, theme: ThemePreference) -> usize {
    let body = doc.root();
    let changed = match theme {
        ThemePreference::Dark => doc.add_class(body, DARKMODE_CLASS),
        ThemePreference::Light => doc.remove_class(body, DARKMODE_CLASS),
    };
    changed as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_name_parsing() {
        assert_eq!(ThemePreference::from_host_name("Dark"), ThemePreference::Dark);
        assert_eq!(ThemePreference::from_host_name("Light"), ThemePreference::Light);
        // Unset or unknown store entries fall back to light.
        assert_eq!(ThemePreference::from_host_name(""), ThemePreference::Light);
        assert_eq!(ThemePreference::from_host_name("Solarized"), ThemePreference::Light);
    }

    #[test]
    fn test_class_follows_preference() {
        let mut doc = Document::new();
        let body = doc.root();

        assert_eq!(apply(&mut doc, ThemePreference::Dark), 1);
        assert!(doc.node(body).unwrap().has_class(DARKMODE_CLASS));
        assert_eq!(apply(&mut doc, ThemePreference::Dark), 0);

        assert_eq!(apply(&mut doc, ThemePreference::Light), 1);
        assert!(!doc.node(body).unwrap().has_class(DARKMODE_CLASS));
        assert_eq!(apply(&mut doc, ThemePreference::Light), 0);
    }
}
