use std::env;
use std::path::Path;

use serde::{Deserialize, Serialize};

use self::log::LogConfig;
use self::parser::ParserConfig;
use self::source::SourceConfig;
use self::ui::UiConfig;

pub mod log;
pub mod parser;
pub mod source;
pub mod ui;

fn default_app_to_ui_capacity() -> usize {
    64
}

fn default_ui_to_app_capacity() -> usize {
    32
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub source: SourceConfig,
    pub parser: ParserConfig,
    pub ui: UiConfig,
    pub log: LogConfig,

    /// Bound of the backend -> UI channel
    #[serde(default = "default_app_to_ui_capacity")]
    pub app_to_ui_capacity: usize,
    /// Bound of the UI -> backend channel
    #[serde(default = "default_ui_to_app_capacity")]
    pub ui_to_app_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: SourceConfig::default(),
            parser: ParserConfig::default(),
            ui: UiConfig::default(),
            log: LogConfig::default(),
            app_to_ui_capacity: default_app_to_ui_capacity(),
            ui_to_app_capacity: default_ui_to_app_capacity(),
        }
    }
}

impl Config {
    /// Defaults overridden by `GLOSA_*` environment variables.
    pub fn new() -> Self {
        let app_to_ui_capacity = env::var("GLOSA_APP_TO_UI_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_app_to_ui_capacity);

        let ui_to_app_capacity = env::var("GLOSA_UI_TO_APP_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_ui_to_app_capacity);

        Config {
            source: SourceConfig::new(),
            parser: ParserConfig::new(),
            ui: UiConfig::new(),
            log: LogConfig::new(),

            app_to_ui_capacity,
            ui_to_app_capacity,
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&data)
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Reads a boolean flag, accepting `1/0`, `true/false`, `yes/no`, `on/off`.
pub(crate) fn env_flag(name: &str) -> Option<bool> {
    let value = env::var(name).ok()?;
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Json(#[from] serde_json::Error),
}
