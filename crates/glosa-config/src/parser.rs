use serde::{Deserialize, Serialize};

fn default_flush_trailing_row() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Keep a last row that is not followed by a line break.
    /// `false` drops it, matching the published widget.
    #[serde(default = "default_flush_trailing_row")]
    pub flush_trailing_row: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            flush_trailing_row: default_flush_trailing_row(),
        }
    }
}

impl ParserConfig {
    pub fn new() -> Self {
        Self {
            flush_trailing_row: crate::env_flag("GLOSA_FLUSH_TRAILING_ROW")
                .unwrap_or_else(default_flush_trailing_row),
        }
    }
}
