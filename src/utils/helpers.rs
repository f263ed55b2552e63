//! Helpers for askfile.
//!
//! This module defines the limits for the path wrap width and provides utility functions:
//! - Finding the home directory and expanding a leading "~"
//! - Printing paths without the Windows verbatim prefix
//! - Checking that a start directory can actually be browsed
//!
//! These helpers are used throughout askfile.

use std::fs;
use std::path::{MAIN_SEPARATOR, Path, PathBuf};

/// Narrowest path wrap width accepted from the config.
pub const MIN_PATH_WIDTH: usize = 8;
/// Widest path wrap width accepted from the config.
pub const MAX_PATH_WIDTH: usize = 512;

pub fn get_home() -> Option<PathBuf> {
    dirs::home_dir()
}

/// Expands a leading "~" to the home directory. Other paths are returned as given.
pub fn expand_home_path(path: &str) -> PathBuf {
    if path == "~" {
        if let Some(home) = get_home() {
            return home;
        }
    } else if let Some(rest) = path
        .strip_prefix("~/")
        .or_else(|| path.strip_prefix(&format!("~{}", MAIN_SEPARATOR)))
        && let Some(home) = get_home()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}

/// True if `path` is a directory whose contents can be listed.
pub fn is_browsable_directory(path: &Path) -> bool {
    path.is_dir() && fs::read_dir(path).is_ok()
}

pub fn readable_path(path: &Path) -> String {
    #[cfg(windows)]
    {
        let display = path.display().to_string();
        display
            .strip_prefix(r"\\?\")
            .unwrap_or(&display)
            .to_string()
    }
    #[cfg(not(windows))]
    {
        path.display().to_string()
    }
}

/// Safely clamp the path wrap width.
///
/// Out of range values are clamped to [MIN_PATH_WIDTH]..=[MAX_PATH_WIDTH] with a warning.
pub fn clamp_path_width(value: usize) -> usize {
    let clamped = value.clamp(MIN_PATH_WIDTH, MAX_PATH_WIDTH);
    if clamped != value {
        tracing::warn!(
            value,
            min = MIN_PATH_WIDTH,
            max = MAX_PATH_WIDTH,
            clamped,
            "path_width out of range"
        );
    }
    clamped
}
