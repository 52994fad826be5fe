//! Configuration file locations

use std::path::PathBuf;

/// Directory name under the platform config root
const APP_NAME: &str = "fibreg";

/// Get the configuration directory path
///
/// Uses the directories crate for platform-appropriate locations:
/// - Linux: `~/.config/fibreg/` (or `$XDG_CONFIG_HOME/fibreg/`)
/// - macOS: `~/Library/Application Support/fibreg/`
/// - Windows: `%APPDATA%\fibreg\`
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the configuration file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}
