//! Host profiles: where the panel lives and how long its animations run.
//!
//! There is no handshake with the host — no transition event, no completion
//! callback. The delays below *are* the protocol: they must match the
//! host's real animation timing, and they are configuration precisely so a
//! host or theme change means editing a profile instead of the state
//! machine.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::panel::{Control, Visibility};

/// Marker attributes and timing for one host.
///
/// Markers are attribute *names*; the node carrying the attribute is the
/// target, whatever its value. Delays are empirical constants tuned to the
/// host's observed animation timing — brittle by nature, so they live in
/// data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncProfile {
    /// Attribute marking the panel node.
    pub panel_marker: String,
    /// Attribute marking the control that expands the panel.
    pub open_control_marker: String,
    /// Attribute marking the control that collapses the panel.
    pub close_control_marker: String,
    /// Element id assigned to the panel so `aria-controls` can refer to it.
    pub panel_element_id: String,
    /// Accessible name for the expand control.
    pub open_label: String,
    /// Accessible name for the collapse control.
    pub close_label: String,

    /// Wait before reading the transient attribute — one tick, enough for
    /// the host to finish its synchronous write.
    pub settle_delay_ms: u64,
    /// Wait before committing an opening transition. Opening is visually
    /// near-instant; the stable state should read open right away.
    pub open_commit_delay_ms: u64,
    /// Wait before committing a closing transition; matches the collapse
    /// animation so the stable state doesn't flip early.
    pub close_commit_delay_ms: u64,
    /// Wait before focusing the collapse control after an open click —
    /// past the commit delay, so any layout shift has finished.
    pub open_focus_delay_ms: u64,
    /// Wait before focusing the expand control after a close click —
    /// collapse animation plus margin.
    pub close_focus_delay_ms: u64,
}

impl Default for SyncProfile {
    fn default() -> Self {
        Self {
            panel_marker: "data-side-panel".to_string(),
            open_control_marker: "data-side-panel-expand".to_string(),
            close_control_marker: "data-side-panel-collapse".to_string(),
            panel_element_id: "side-panel".to_string(),
            open_label: "Expand side panel".to_string(),
            close_label: "Collapse side panel".to_string(),
            settle_delay_ms: 1,
            open_commit_delay_ms: 1,
            close_commit_delay_ms: 200,
            open_focus_delay_ms: 200,
            close_focus_delay_ms: 210,
        }
    }
}

impl SyncProfile {
    /// Phase-1 delay before the transient read.
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    /// Phase-2 delay before committing the given settled state.
    pub fn commit_delay(&self, visibility: Visibility) -> Duration {
        let ms = match visibility {
            Visibility::Open => self.open_commit_delay_ms,
            Visibility::Closed => self.close_commit_delay_ms,
        };
        Duration::from_millis(ms)
    }

    /// Delay before the focus move that follows a click on `clicked`.
    pub fn focus_delay(&self, clicked: Control) -> Duration {
        let ms = match clicked {
            Control::Open => self.open_focus_delay_ms,
            Control::Close => self.close_focus_delay_ms,
        };
        Duration::from_millis(ms)
    }
}

/// Error type for profile loading.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON parse error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

/// Load a profile from a RON file.
pub fn load_profile(path: &Path) -> Result<SyncProfile, ProfileError> {
    let text = std::fs::read_to_string(path)?;
    let profile: SyncProfile = ron::from_str(&text)?;
    Ok(profile)
}

/// Load a profile, falling back to [`SyncProfile::default`] on any error.
///
/// A missing or broken profile must never take the synchronizer down; the
/// defaults match the host this was originally tuned against.
pub fn load_profile_or_default(path: &Path) -> SyncProfile {
    if !path.exists() {
        debug!("no profile at {:?}, using defaults", path);
        return SyncProfile::default();
    }
    match load_profile(path) {
        Ok(profile) => {
            info!("loaded sync profile from {:?}", path);
            profile
        }
        Err(e) => {
            warn!("failed to load sync profile from {:?}: {}", path, e);
            warn!("falling back to default profile");
            SyncProfile::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_matches_host_protocol() {
        let profile = SyncProfile::default();
        assert_eq!(profile.settle_delay(), Duration::from_millis(1));
        assert_eq!(
            profile.commit_delay(Visibility::Open),
            Duration::from_millis(1)
        );
        assert_eq!(
            profile.commit_delay(Visibility::Closed),
            Duration::from_millis(200)
        );
        assert_eq!(profile.focus_delay(Control::Open), Duration::from_millis(200));
        assert_eq!(
            profile.focus_delay(Control::Close),
            Duration::from_millis(210)
        );
    }

    #[test]
    fn test_partial_profile_fills_defaults() {
        // Profiles override only what differs from the reference host.
        let profile: SyncProfile =
            ron::from_str("(close_commit_delay_ms: 350, close_focus_delay_ms: 360)").unwrap();
        assert_eq!(profile.close_commit_delay_ms, 350);
        assert_eq!(profile.close_focus_delay_ms, 360);
        assert_eq!(profile.settle_delay_ms, 1);
        assert_eq!(profile.panel_marker, "data-side-panel");
    }

    #[test]
    fn test_roundtrip_through_file() {
        let mut profile = SyncProfile::default();
        profile.panel_marker = "data-drawer".to_string();
        profile.open_commit_delay_ms = 5;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("host.ron");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, "{}", ron::to_string(&profile).unwrap()).unwrap();

        let loaded = load_profile(&path).unwrap();
        assert_eq!(loaded, profile);
    }

    #[test]
    fn test_broken_profile_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("host.ron");
        std::fs::write(&path, "(settle_delay_ms: \"not a number\")").unwrap();

        assert!(load_profile(&path).is_err());
        assert_eq!(load_profile_or_default(&path), SyncProfile::default());
        assert_eq!(
            load_profile_or_default(&dir.path().join("absent.ron")),
            SyncProfile::default()
        );
    }
}
