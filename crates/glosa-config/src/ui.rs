use std::env;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// Icon of the theme toggle: offers the opposite theme.
    pub fn icon(self) -> &'static str {
        match self {
            Theme::Light => "🌙",
            Theme::Dark => "☀️",
        }
    }
}

/// How marked text is drawn in the terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HighlightStyle {
    /// ANSI on a terminal, `<mark>` tags otherwise
    #[default]
    Auto,
    Ansi,
    Html,
    Brackets,
}

impl HighlightStyle {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "auto" => Some(HighlightStyle::Auto),
            "ansi" => Some(HighlightStyle::Ansi),
            "html" => Some(HighlightStyle::Html),
            "brackets" => Some(HighlightStyle::Brackets),
            _ => None,
        }
    }
}

fn default_no_results_text() -> String {
    "Tidak ada hasil ditemukan.".to_string()
}

fn default_label_definition_english() -> String {
    "Definition (EN):".to_string()
}

fn default_label_definition_local() -> String {
    "Definisi (ID):".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub highlight: HighlightStyle,
    #[serde(default = "default_no_results_text")]
    pub no_results_text: String,
    #[serde(default = "default_label_definition_english")]
    pub label_definition_english: String,
    #[serde(default = "default_label_definition_local")]
    pub label_definition_local: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            highlight: HighlightStyle::default(),
            no_results_text: default_no_results_text(),
            label_definition_english: default_label_definition_english(),
            label_definition_local: default_label_definition_local(),
        }
    }
}

impl UiConfig {
    pub fn new() -> Self {
        let theme = env::var("GLOSA_THEME")
            .ok()
            .and_then(|v| Theme::parse(&v))
            .unwrap_or_default();
        let highlight = env::var("GLOSA_HIGHLIGHT")
            .ok()
            .and_then(|v| HighlightStyle::parse(&v))
            .unwrap_or_default();

        Self {
            theme,
            highlight,
            ..Self::default()
        }
    }
}
