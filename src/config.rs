//! Configuration management
//!
//! Preferences are read from a TOML file at startup. Every field has a
//! default, so a missing file or a partial file is fine:
//!
//! ```toml
//! [notifications]
//! console = true
//! log = false
//!
//! [shell]
//! title = "Astronaut Daily Schedule"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;

use crate::adapters::{ConsoleNotifier, LogNotifier};
use crate::core::error::ScheduleError;
use crate::core::services::ScheduleManager;
use crate::paths;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Which conflict observers to register
    #[serde(default)]
    pub notifications: NotificationConfig,
    /// Console shell preferences
    #[serde(default)]
    pub shell: ShellConfig,
}

/// Conflict observer selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct NotificationConfig {
    /// Print notifications to stdout
    #[serde(default = "default_true")]
    pub console: bool,
    /// Emit notifications as `warn` log records
    #[serde(default)]
    pub log: bool,
}

const fn default_true() -> bool {
    true
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            console: true,
            log: false,
        }
    }
}

/// Shell preferences
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ShellConfig {
    /// Banner shown above the menu
    #[serde(default = "default_title")]
    pub title: String,
}

fn default_title() -> String {
    "Astronaut Daily Schedule".to_string()
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
        }
    }
}

impl Config {
    /// Get the default config file path
    #[must_use]
    pub fn default_path() -> PathBuf {
        paths::global_config()
    }

    /// Load config from the given path, or the default location
    ///
    /// A missing file yields the defaults; an unreadable or malformed one is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ScheduleError> {
        let path = path.map_or_else(Self::default_path, Path::to_path_buf);
        if !path.exists() {
            debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let config = Self::parse(&content).map_err(|message| ScheduleError::Config {
            path: path.clone(),
            message,
        })?;
        debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse config from TOML text
    pub fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Build a schedule with the configured observers registered
    #[must_use]
    pub fn build_manager(&self) -> ScheduleManager {
        let mut manager = ScheduleManager::new();
        if self.notifications.console {
            manager.add_observer(ConsoleNotifier::new());
        }
        if self.notifications.log {
            manager.add_observer(LogNotifier::new());
        }
        manager
    }
}
