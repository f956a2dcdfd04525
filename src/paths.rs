//! Centralized path definitions
//!
//! The schedule itself is never written to disk. The only file the
//! program reads is an optional user configuration:
//!
//! ```text
//! <config_dir>/astro-schedule/
//! └── config.toml               # Notification and shell preferences
//! ```
//!
//! `<config_dir>` is the platform config directory (`~/.config` on Linux),
//! falling back to the home directory when none is known.

use std::path::PathBuf;

/// Directory name under the platform config directory
pub const APP_DIR: &str = "astro-schedule";

/// Config filename
pub const CONFIG_FILE: &str = "config.toml";

/// Get the global config directory.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::config_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("~"))
        .join(APP_DIR)
}

/// Get the global config file path.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(CONFIG_FILE)
}
