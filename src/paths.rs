//! Centralized path definitions for codesift
//!
//! ## Storage Layout
//!
//! ```text
//! ~/.codesift/
//! └── config.toml               # Bot token, server address
//! ```
//!
//! Nothing else is written to disk: submitted lists are never persisted.

use std::path::PathBuf;

/// Global config directory name
const GLOBAL_DIR: &str = ".codesift";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get the global codesift directory.
///
/// Returns `~/.codesift/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the global config file path.
///
/// Returns `~/.codesift/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}
