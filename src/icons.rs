//! Icon theme detection and icon path resolution.
//!
//! Follows the freedesktop icon-theme layout, see
//! <https://specifications.freedesktop.org/icon-theme-spec/>.
//! Everything here is best effort: failures degrade to a default value
//! instead of propagating, since a missing icon must never break a
//! widget refresh.

use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::paths::application_directories;

/// Theme used when the desktop settings query fails.
pub const DEFAULT_THEME: &str = "hicolor";

/// Icon name used when a client has no usable desktop entry.
pub const FALLBACK_ICON_NAME: &str = "application-default-icon";

const THEME_QUERY: [&str; 4] = [
    "gsettings",
    "get",
    "org.gnome.desktop.interface",
    "icon-theme",
];
const DEFAULT_INDEX_THEME: &str = "/usr/share/icons/default/index.theme";
const SYSTEM_ICON_ROOT: &str = "/usr/share/icons";

/// The active icon theme from desktop settings, or [`DEFAULT_THEME`]
/// when the query fails. Never errors.
pub fn current_theme() -> String {
    theme_from_command(THEME_QUERY[0], &THEME_QUERY[1..])
}

fn theme_from_command(program: &str, args: &[&str]) -> String {
    query_theme(program, args).unwrap_or_else(|| DEFAULT_THEME.to_string())
}

fn query_theme(program: &str, args: &[&str]) -> Option<String> {
    let output = match Command::new(program).args(args).output() {
        Ok(output) => output,
        Err(e) => {
            warn!("icon theme query failed to run: {e}");
            return None;
        }
    };
    if !output.status.success() {
        warn!("icon theme query exited with {}", output.status);
        return None;
    }

    let theme = String::from_utf8_lossy(&output.stdout)
        .trim()
        .replace('\'', "");
    if theme.is_empty() { None } else { Some(theme) }
}

/// Theme the system default icon theme inherits from, if discoverable.
pub fn inherited_default_theme() -> Option<String> {
    inherits_from(Path::new(DEFAULT_INDEX_THEME))
}

fn inherits_from(index: &Path) -> Option<String> {
    let content = match fs::read_to_string(index) {
        Ok(content) => content,
        Err(e) => {
            debug!("no readable theme index at {}: {e}", index.display());
            return None;
        }
    };

    content
        .lines()
        .find_map(|line| line.strip_prefix("Inherits="))
        .map(|value| value.trim().to_string())
}

/// Icon name for a client class, taken from its desktop entry when one
/// exists. Falls back to [`FALLBACK_ICON_NAME`].
pub fn desktop_entry_icon(client: &str) -> String {
    desktop_entry_icon_in(client, &application_directories())
}

fn desktop_entry_icon_in(client: &str, dirs: &[PathBuf]) -> String {
    let descriptor = dirs
        .iter()
        .map(|dir| dir.join(format!("{client}.desktop")))
        .find(|path| path.is_file());

    let Some(path) = descriptor else {
        return FALLBACK_ICON_NAME.to_string();
    };

    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) => {
            warn!("failed to read {}: {e}", path.display());
            return FALLBACK_ICON_NAME.to_string();
        }
    };

    content
        .lines()
        .find_map(|line| line.strip_prefix("Icon="))
        .map(|value| value.trim().to_string())
        .unwrap_or_else(|| FALLBACK_ICON_NAME.to_string())
}

/// Candidate icon files for a resolved name, in probe order, rooted at
/// the system icon directory.
///
/// The ordering is name-major: both themes are tried for the real icon
/// name before either theme is tried for the fallback name, svg before
/// png within each pair. Kept exactly as the widget has always probed,
/// even though it ranks the fallback theme's real icon above the
/// preferred theme's generic one.
pub fn candidate_paths(
    theme: &str,
    fallback_theme: Option<&str>,
    name: &str,
    fallback_name: &str,
) -> Vec<PathBuf> {
    let mut themes = vec![theme];
    if let Some(fallback) = fallback_theme {
        themes.push(fallback);
    }

    let mut paths = Vec::with_capacity(themes.len() * 4);
    for name in [name, fallback_name] {
        for theme in &themes {
            for ext in ["svg", "png"] {
                paths.push(PathBuf::from(format!(
                    "{SYSTEM_ICON_ROOT}/{theme}/16x16/apps/{name}.{ext}"
                )));
            }
        }
    }
    paths
}

/// Resolve the icon file for a client class.
///
/// Returns the first candidate path that exists on disk, or the empty
/// string when none do. Never errors, never panics.
pub fn resolve_icon(client: &str) -> String {
    let theme = current_theme();
    let fallback_theme = inherited_default_theme();
    let name = desktop_entry_icon(client);

    first_existing(&candidate_paths(
        &theme,
        fallback_theme.as_deref(),
        &name,
        FALLBACK_ICON_NAME,
    ))
}

fn first_existing(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .find(|path| path.exists())
        .map(|path| path.to_string_lossy().into_owned())
        .unwrap_or_default()
}
