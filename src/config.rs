//! Highlighter configuration
//!
//! Stored in `~/.config/selection-highlighter/config.yaml`. Every field is
//! optional; missing fields take their defaults.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::debounce::SELECTION_QUIET_MS;
use crate::palette::ColorTag;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlighterConfig {
    /// Quiet interval a selection must stay unchanged before it is committed
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Color active when the session starts
    #[serde(default)]
    pub default_color: ColorTag,

    /// Show transient messages for commands
    #[serde(default = "default_true")]
    pub notifications: bool,

    /// Append a blank line when a highlight reaches the end of the document
    #[serde(default = "default_true")]
    pub pad_eof: bool,

    /// Per-color `#RRGGBB[AA]` style overrides
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub palette: HashMap<ColorTag, String>,
}

const APP_DIR: &str = "selection-highlighter";

/// Directory holding `config.yaml` and `logs/`
///
/// `$XDG_CONFIG_HOME/selection-highlighter` when set, else
/// `~/.config/selection-highlighter`; `%APPDATA%\selection-highlighter` on Windows.
pub fn config_dir() -> Option<PathBuf> {
    let base = if cfg!(target_os = "windows") {
        std::env::var_os("APPDATA").map(PathBuf::from)
    } else {
        std::env::var_os("XDG_CONFIG_HOME")
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
    };
    base.map(|dir| dir.join(APP_DIR))
}

pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

/// Create the logs directory if needed and return it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let logs = logs_dir().ok_or_else(|| "No config directory available".to_string())?;
    std::fs::create_dir_all(&logs)
        .map_err(|e| format!("Failed to create {}: {}", logs.display(), e))?;
    Ok(logs)
}

fn default_debounce_ms() -> u64 {
    SELECTION_QUIET_MS
}

fn default_true() -> bool {
    true
}

impl Default for HighlighterConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            default_color: ColorTag::default(),
            notifications: true,
            pad_eof: true,
            palette: HashMap::new(),
        }
    }
}

impl HighlighterConfig {
    /// Load config from the default location, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from `path`, falling back to defaults on any problem
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parse config YAML
    pub fn from_yaml(content: &str) -> Result<Self, String> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| e.to_string())
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<(), String> {
        let path = config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to `path`, creating the parent directory if needed
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
