//! Client window records.

use serde::Deserialize;

use crate::monitor::WorkspaceRef;

/// A single client (application window) shown in the taskbar.
///
/// Built fresh from one compositor query result and never mutated
/// afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Client {
    /// Window address without the `0x` prefix.
    pub address: String,
    /// Workspace the window sits on.
    pub workspace_id: String,
    /// Window class (app identifier).
    pub class_name: String,
    /// Resolved icon path, empty when resolution found nothing.
    pub icon_path: String,
}

impl Client {
    /// Build a client record, stripping a single leading `0x` from the
    /// address. Addresses without the prefix pass through unchanged.
    pub fn new(address: &str, workspace_id: &str, class_name: &str, icon_path: &str) -> Self {
        Self {
            address: address.strip_prefix("0x").unwrap_or(address).to_string(),
            workspace_id: workspace_id.to_string(),
            class_name: class_name.to_string(),
            icon_path: icon_path.to_string(),
        }
    }

    /// Build from a raw `hyprctl -j clients` record. The icon path comes
    /// from the caller, which resolves it per class.
    pub fn from_data(data: &ClientData, icon_path: &str) -> Self {
        Self::new(
            &data.address,
            &data.workspace.id.to_string(),
            &data.class,
            icon_path,
        )
    }
}

/// Raw client record as emitted by `hyprctl -j clients`.
#[derive(Clone, Debug, Deserialize)]
pub struct ClientData {
    pub address: String,
    pub class: String,
    pub workspace: WorkspaceRef,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_hex_prefix_once() {
        let client = Client::new("0x55d3f4a0", "1", "firefox", "");
        assert_eq!(client.address, "55d3f4a0");
    }

    #[test]
    fn address_without_prefix_is_unchanged() {
        let client = Client::new("55d3f4a0", "1", "firefox", "");
        assert_eq!(client.address, "55d3f4a0");
    }

    #[test]
    fn normalization_is_idempotent() {
        let once = Client::new("0x55d3f4a0", "1", "firefox", "");
        let twice = Client::new(&once.address, "1", "firefox", "");
        assert_eq!(once.address, twice.address);
    }

    #[test]
    fn from_data_maps_hyprctl_fields() {
        let data: ClientData = serde_json::from_str(
            r#"{
                "address": "0xabc123",
                "class": "kitty",
                "workspace": { "id": 3, "name": "3" }
            }"#,
        )
        .unwrap();

        let client = Client::from_data(&data, "/usr/share/icons/hicolor/16x16/apps/kitty.png");
        assert_eq!(client.address, "abc123");
        assert_eq!(client.workspace_id, "3");
        assert_eq!(client.class_name, "kitty");
        assert_eq!(
            client.icon_path,
            "/usr/share/icons/hicolor/16x16/apps/kitty.png"
        );
    }
}
