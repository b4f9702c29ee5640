use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::loader::DEFAULT_DATASET_FILE;

/// Settings file looked up in the working directory.
pub const DEFAULT_SETTINGS_FILE: &str = "chatbot.json";

/// Runtime settings shared by the `gui` and `chat` front ends.
///
/// Every field is optional in the JSON file; missing ones take the
/// defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// `Q:` / `A:` dataset overlaid on the built-in answers
    pub dataset_path: PathBuf,
    /// pause before the bot's reply is shown, in milliseconds
    pub typing_delay_ms: u64,
    /// fixed RNG seed for reproducible sessions; `None` seeds from the OS
    pub seed: Option<u64>,
    /// dark (default) or light window theme
    pub dark_mode: bool,
    /// show the welcome message when a session starts
    pub show_welcome: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from(DEFAULT_DATASET_FILE),
            typing_delay_ms: 800,
            seed: None,
            dark_mode: true,
            show_welcome: true,
        }
    }
}

impl Settings {
    /// Load settings from `path`. A missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("no settings at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        Self::from_json(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load from [`DEFAULT_SETTINGS_FILE`], logging and falling back to the
    /// defaults on any error.
    pub fn load_or_default() -> Self {
        Self::load(DEFAULT_SETTINGS_FILE).unwrap_or_else(|e| {
            tracing::warn!("{e}; using default settings");
            Self::default()
        })
    }

    /// Parse settings from a JSON document.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// [`Settings::typing_delay_ms`] as a `Duration`.
    pub fn typing_delay(&self) -> Duration {
        Duration::from_millis(self.typing_delay_ms)
    }
}
