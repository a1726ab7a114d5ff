//! Directory where the executable lives, plus the zoom level cache location.

use std::path::PathBuf;

/// Directory containing the running executable. Falls back to current directory if unavailable.
pub fn exe_directory() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(PathBuf::from))
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

/// Default root for cached zoom levels: the OS cache directory, or a
/// `cache/` folder next to the executable when there is none.
pub fn default_cache_directory() -> PathBuf {
    directories::ProjectDirs::from("", "Squirrel Computers", "ChipMap")
        .map(|d| d.cache_dir().join("zoom-levels"))
        .unwrap_or_else(|| exe_directory().join("cache"))
}
