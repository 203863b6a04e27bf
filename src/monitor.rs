//! Monitor records.

use serde::Deserialize;

/// A physical display and its workspace pointers.
///
/// Rebuilt from compositor monitor data on every refresh cycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Monitor {
    pub name: String,
    pub id: i64,
    pub is_focused: bool,
    /// Workspace currently shown on this monitor, if known.
    pub active_workspace_id: Option<i64>,
    /// Special (scratchpad) workspace id. Hyprland reports 0 when no
    /// special workspace is open, which is distinct from absent.
    pub special_workspace_id: Option<i64>,
}

impl Monitor {
    /// Build a monitor with no focus and no workspace pointers.
    pub fn new(name: &str, id: i64) -> Self {
        Self {
            name: name.to_string(),
            id,
            is_focused: false,
            active_workspace_id: None,
            special_workspace_id: None,
        }
    }

    /// Build from a raw `hyprctl -j monitors` record.
    pub fn from_data(data: &MonitorData) -> Self {
        Self {
            name: data.name.clone(),
            id: data.id,
            is_focused: data.focused,
            active_workspace_id: Some(data.active_workspace.id),
            special_workspace_id: Some(data.special_workspace.id),
        }
    }

    /// Whether this monitor has an open special workspace.
    /// 0 is the compositor's "none" sentinel, so only a present nonzero
    /// id counts.
    pub fn has_special_workspace(&self) -> bool {
        matches!(self.special_workspace_id, Some(id) if id != 0)
    }
}

/// Raw monitor record as emitted by `hyprctl -j monitors`.
#[derive(Clone, Debug, Deserialize)]
pub struct MonitorData {
    pub name: String,
    pub id: i64,
    #[serde(default)]
    pub focused: bool,
    #[serde(rename = "activeWorkspace")]
    pub active_workspace: WorkspaceRef,
    #[serde(rename = "specialWorkspace")]
    pub special_workspace: WorkspaceRef,
}

/// Workspace sub-record embedded in monitor and client records.
#[derive(Clone, Debug, Deserialize)]
pub struct WorkspaceRef {
    pub id: i64,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_special_workspace_when_absent() {
        let monitor = Monitor::new("DP-1", 0);
        assert!(!monitor.has_special_workspace());
    }

    #[test]
    fn zero_special_workspace_counts_as_none() {
        let mut monitor = Monitor::new("DP-1", 0);
        monitor.special_workspace_id = Some(0);
        assert!(!monitor.has_special_workspace());
    }

    #[test]
    fn nonzero_special_workspace_is_present() {
        let mut monitor = Monitor::new("DP-1", 0);
        monitor.special_workspace_id = Some(5);
        assert!(monitor.has_special_workspace());
    }

    #[test]
    fn from_data_maps_hyprctl_fields() {
        let data: MonitorData = serde_json::from_str(
            r#"{
                "name": "eDP-1",
                "id": 1,
                "focused": true,
                "activeWorkspace": { "id": 2, "name": "2" },
                "specialWorkspace": { "id": -98, "name": "special:magic" }
            }"#,
        )
        .unwrap();

        let monitor = Monitor::from_data(&data);
        assert_eq!(monitor.name, "eDP-1");
        assert_eq!(monitor.id, 1);
        assert!(monitor.is_focused);
        assert_eq!(monitor.active_workspace_id, Some(2));
        assert_eq!(monitor.special_workspace_id, Some(-98));
        assert!(monitor.has_special_workspace());
    }
}
