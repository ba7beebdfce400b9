use std::env;

use serde::{Deserialize, Serialize};

/// Published spreadsheet the glossary ships with.
pub const DEFAULT_SOURCE_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vT1pZZXCwj88_g99qjDIqIm3i2vcHzmCDvAgYK0vOQzN1RE4fl20VcnbpYewLOQdQ/pub?gid=1600430165&single=true&output=csv";

fn default_url() -> String {
    DEFAULT_SOURCE_URL.to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

/// Where the CSV document comes from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    #[serde(default = "default_url")]
    pub url: String,
    /// Local CSV file, takes precedence over `url` when set
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            path: None,
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl SourceConfig {
    pub fn new() -> Self {
        let url = env::var("GLOSA_SOURCE_URL").unwrap_or_else(|_| default_url());
        let path = env::var("GLOSA_SOURCE_PATH").ok().filter(|p| !p.is_empty());
        let timeout_seconds = env::var("GLOSA_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_timeout_seconds);

        Self {
            url,
            path,
            timeout_seconds,
        }
    }
}
