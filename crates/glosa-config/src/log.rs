use std::env;

use serde::{Deserialize, Serialize};

fn default_filter() -> String {
    "glosa=info".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `EnvFilter` directives used when neither `GLOSA_LOG` nor `RUST_LOG` is set
    #[serde(default = "default_filter")]
    pub filter: String,
    /// Emit JSON lines instead of human readable output
    #[serde(default)]
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            json: false,
        }
    }
}

impl LogConfig {
    pub fn new() -> Self {
        Self {
            filter: env::var("GLOSA_LOG_FILTER").unwrap_or_else(|_| default_filter()),
            json: crate::env_flag("GLOSA_LOG_JSON").unwrap_or(false),
        }
    }
}
