//! Extension settings
//!
//! A single setting: the editor command. Read from
//! `<config_dir>/open-in-code/config.toml`; any problem falls back to the
//! default so the menu keeps working.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

const CONFIG_DIR: &str = "open-in-code";
const CONFIG_FILENAME: &str = "config.toml";

/// Default editor command.
pub const DEFAULT_COMMAND: &str = "code";

/// User-adjustable settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Executable invoked with the folder path as its single argument.
    pub command: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            command: DEFAULT_COMMAND.to_string(),
        }
    }
}

impl Settings {
    /// Load settings from the user config directory.
    ///
    /// Returns default settings if the file doesn't exist or can't be parsed.
    pub fn load() -> Self {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load settings from an explicit path.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            debug!("No config file at {:?}, using defaults", path);
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(settings) => {
                    debug!("Loaded settings from {:?}", path);
                    settings
                }
                Err(e) => {
                    warn!("Failed to parse {:?}: {}", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read {:?}: {}", path, e);
                Self::default()
            }
        }
    }
}

/// Path of the user config file, if a config directory exists.
fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILENAME))
}
