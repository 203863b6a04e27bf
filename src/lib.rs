//! hypr-widgets: Hyprland state models and icon lookup for status-bar widgets.
//!
//! Shapes `hyprctl -j` query results into simple records (monitors,
//! workspaces, clients) and resolves per-application icon paths so a
//! widget layer can render them. Everything is rebuilt from scratch on
//! each refresh cycle; icon lookup is best effort and never fails the
//! caller.

pub mod client;
pub mod icons;
pub mod monitor;
pub mod paths;
pub mod workspace;

pub use client::{Client, ClientData};
pub use icons::{current_theme, resolve_icon};
pub use monitor::{Monitor, MonitorData};
pub use workspace::{Workspace, WorkspaceData, mark_active};
