//! Marker attributes locating the host's landmarks.
//!
//! The host's class names churn between releases; marker attributes are
//! the stable contract an embedder stamps onto the tree when mirroring the
//! page in. Defaults match the reference host this was tuned against.

use serde::{Deserialize, Serialize};

/// Attribute names (and one element id) the passes navigate by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostMarkers {
    /// The app's main view container; receives `role="main"`.
    pub app_view_marker: String,
    /// The main scroll container the host leaves a spurious `tabindex` on.
    pub main_container_marker: String,
    /// The top menu's toggle button.
    pub menu_button_marker: String,
    /// Element id of the menu dropdown, once the host renders it.
    pub menu_dropdown_id: String,
    /// The host's overlay node that blocks focus from moving.
    pub focus_trap_marker: String,
    /// Menu item label that must keep its native (non-button) semantics.
    pub developer_item_label: String,
}

impl Default for HostMarkers {
    fn default() -> Self {
        Self {
            app_view_marker: "data-app-view".to_string(),
            main_container_marker: "data-main-container".to_string(),
            menu_button_marker: "data-menu-button".to_string(),
            menu_dropdown_id: "menu-dropdown".to_string(),
            focus_trap_marker: "data-focus-trap".to_string(),
            developer_item_label: "Developer options".to_string(),
        }
    }
}
