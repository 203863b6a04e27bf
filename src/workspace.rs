//! Workspace records and their JSON contract.

use serde::{Deserialize, Serialize};

use crate::monitor::{Monitor, MonitorData};

/// A virtual desktop and the icons of the clients on it.
///
/// One instance per workspace per refresh cycle; the whole set is
/// discarded and rebuilt on the next refresh.
///
/// Serializes to the shape the widget layer consumes:
/// `id`, `name`, `monitor`, `monitorID`, `isActive`, `clients`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Workspace {
    pub id: i64,
    pub name: String,
    /// Name of the monitor this workspace belongs to.
    pub monitor: String,
    #[serde(rename = "monitorID")]
    pub monitor_id: i64,
    #[serde(rename = "isActive")]
    pub is_active: bool,
    /// Client icon paths in display order.
    #[serde(rename = "clients")]
    pub client_icons: Vec<String>,
    /// Special (scratchpad) workspaces carry negative ids.
    #[serde(skip)]
    pub is_special: bool,
}

impl Workspace {
    /// Build from a generic `hyprctl -j workspaces` record.
    ///
    /// `is_active` starts false; the caller flips it once monitor state
    /// is known, see [`mark_active`].
    pub fn from_listing(data: &WorkspaceData) -> Self {
        Self {
            id: data.id,
            name: data.name.clone(),
            monitor: data.monitor.clone(),
            monitor_id: data.monitor_id,
            is_active: false,
            client_icons: Vec::new(),
            is_special: data.id < 0,
        }
    }

    /// Build from a monitor's embedded `activeWorkspace` sub-record.
    ///
    /// The sub-record carries no monitor identity of its own, so that
    /// comes from the owning monitor. `is_active` is true by definition.
    pub fn from_monitor_active(data: &MonitorData) -> Self {
        Self {
            id: data.active_workspace.id,
            name: data.active_workspace.name.clone(),
            monitor: data.name.clone(),
            monitor_id: data.id,
            is_active: true,
            client_icons: Vec::new(),
            is_special: data.active_workspace.id < 0,
        }
    }

    /// Append a client icon to this workspace.
    pub fn add_client_icon(&mut self, icon_path: &str) {
        self.client_icons.push(icon_path.to_string());
    }

    /// Remove a client icon from this workspace. Removing a path that is
    /// not in the list is a no-op.
    pub fn remove_client_icon(&mut self, icon_path: &str) {
        if let Some(pos) = self.client_icons.iter().position(|p| p == icon_path) {
            self.client_icons.remove(pos);
        }
    }

    /// Remove all client icons from this workspace.
    pub fn clear_clients(&mut self) {
        self.client_icons.clear();
    }

    /// Whether this workspace has any clients.
    pub fn has_clients(&self) -> bool {
        !self.client_icons.is_empty()
    }
}

/// Flip `is_active` on every workspace some monitor currently points at.
pub fn mark_active(workspaces: &mut [Workspace], monitors: &[Monitor]) {
    for workspace in workspaces.iter_mut() {
        workspace.is_active = monitors
            .iter()
            .any(|m| m.active_workspace_id == Some(workspace.id));
    }
}

/// Raw workspace record as emitted by `hyprctl -j workspaces`.
#[derive(Clone, Debug, Deserialize)]
pub struct WorkspaceData {
    pub id: i64,
    pub name: String,
    pub monitor: String,
    #[serde(rename = "monitorID")]
    pub monitor_id: i64,
}
