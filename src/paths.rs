//! Centralized path definitions for statsbot
//!
//! ```text
//! <config dir>/statsbot/
//! └── config.toml               # Site profiles (credentials, polling, grammar)
//! ```
//!
//! `<config dir>` is `$XDG_CONFIG_HOME` (or `~/.config`) on Linux, and the
//! platform equivalent elsewhere.

use std::path::{Path, PathBuf};

/// Directory name below the platform config dir
const CONFIG_DIR: &str = "statsbot";

/// Config filename
const CONFIG_FILE: &str = "config.toml";

/// Get the statsbot config directory.
#[must_use]
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR)
}

/// Get the default config file path.
#[must_use]
pub fn default_config_file() -> PathBuf {
    config_dir().join(CONFIG_FILE)
}

/// Resolve the config file, preferring an explicit path.
#[must_use]
pub fn config_file(explicit: Option<&Path>) -> PathBuf {
    explicit.map_or_else(default_config_file, Path::to_path_buf)
}
