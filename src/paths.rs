//! Path helpers for XDG icon and application directories.

use std::path::PathBuf;

const DEFAULT_XDG_DATA_DIRS: &str = "/usr/local/share:/usr/share";

/// Ordered icon search paths: the user's `~/.icons`, one `icons`
/// subdirectory per `XDG_DATA_DIRS` entry, then the system pixmap
/// directory. Order is priority for callers that walk directories.
pub fn icon_search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".icons"));
    }

    let data_dirs = std::env::var("XDG_DATA_DIRS")
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_XDG_DATA_DIRS.to_string());
    for data_dir in data_dirs.split(':') {
        if !data_dir.is_empty() {
            paths.push(PathBuf::from(data_dir).join("icons"));
        }
    }

    paths.push(PathBuf::from("/usr/share/pixmaps"));
    paths
}

/// Launcher-descriptor directories in lookup order, home-local first.
pub fn application_directories() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".local/share/applications"));
    }
    paths.push(PathBuf::from("/usr/share/applications"));
    paths.push(PathBuf::from("/usr/local/share/applications"));

    paths
}
