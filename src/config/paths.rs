use std::path::{Path, PathBuf};

use crate::constants::WHITELIST_FILE_NAME;

fn app_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join("custom_whitelist")
}

/// Returns the platform-specific path for the config file.
///
/// # Notes
/// - Uses platform-specific config directory (e.g., ~/.config on Linux)
/// - Falls back to current directory if config directory is unavailable
pub fn get_config_path() -> String {
    app_dir().join("config.toml").to_string_lossy().to_string()
}

/// Returns the platform-specific path for the log directory.
pub fn get_log_dir_path() -> String {
    app_dir().join("logs").to_string_lossy().to_string()
}

/// Returns the default location of the whitelist file.
pub fn get_default_whitelist_path() -> String {
    app_dir()
        .join(WHITELIST_FILE_NAME)
        .to_string_lossy()
        .to_string()
}
