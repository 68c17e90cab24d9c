// Cache path utilities.

use std::path::PathBuf;

use directories::ProjectDirs;

/// Get the base cache directory (~/.cache/randomstar on Linux).
pub fn cache_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "randomstar").map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Path to the cached star list.
pub fn star_data_path() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join("data.json"))
}
