//! Platform path resolution.
//!
//! This module locates the configuration file, the directory archives are saved
//! to, and the directory logs are written to, and expands `~` in user-supplied
//! paths. All lookups go through the `dirs` crate; when a platform directory is
//! unknown the functions fall back to paths relative to the working directory.

use std::path::{Path, PathBuf};

/// Application directory name under the platform config/data roots.
pub const APP_DIR: &str = "dataset-explorer";

/// Returns the default configuration file path, e.g.
/// `~/.config/dataset-explorer/config.toml` on Linux.
#[must_use]
pub fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
}

/// Returns the directory downloaded archives are saved to by default.
///
/// Uses the platform download directory, falling back to `./downloads`.
#[must_use]
pub fn default_download_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| PathBuf::from("downloads"))
}

/// Returns the data directory used for log files, e.g.
/// `~/.local/share/dataset-explorer` on Linux.
#[must_use]
pub fn data_dir() -> PathBuf {
    dirs::data_local_dir().map_or_else(|| PathBuf::from(".").join(APP_DIR), |dir| dir.join(APP_DIR))
}

/// Expands a leading `~` to the home directory.
///
/// Paths without a leading tilde, or with no known home directory, are
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use dataset_explorer::infrastructure::expand_tilde;
/// use std::path::Path;
///
/// assert_eq!(expand_tilde(Path::new("/absolute/path")), Path::new("/absolute/path"));
/// ```
#[must_use]
pub fn expand_tilde(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    dirs::home_dir().map_or_else(|| path.to_path_buf(), |home| home.join(rest))
}
