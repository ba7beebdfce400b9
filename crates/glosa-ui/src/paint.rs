use std::fmt::Write;

use glosa_config::ui::{HighlightStyle, Theme, UiConfig};
use glosa_types::{DisplayUnit, HighlightedText, Query, RecordCard};

use crate::state::UiState;

const INDENT: &str = "      ";

pub const HELP: &str = "\
Type a keyword to search, or a command:
  :all            show every term
  :find <kw>      search, also for numeric terms
  :cat <tag>      filter by category
  <n> | :open <n> expand/collapse card n
  :menu           show/hide the category list
  :theme          switch light/dark
  :reload         fetch the glossary again
  :quit           exit";

/// Turns UI state into terminal text.
pub struct Painter {
    config: UiConfig,
    style: HighlightStyle,
}

impl Painter {
    /// `is_tty` resolves [`HighlightStyle::Auto`].
    pub fn new(config: UiConfig, is_tty: bool) -> Self {
        let style = match config.highlight {
            HighlightStyle::Auto if is_tty => HighlightStyle::Ansi,
            HighlightStyle::Auto => HighlightStyle::Html,
            other => other,
        };
        Self { config, style }
    }

    fn marks(&self, theme: Theme) -> (&'static str, &'static str) {
        match (self.style, theme) {
            (HighlightStyle::Ansi, Theme::Light) => ("\x1b[7m", "\x1b[27m"),
            (HighlightStyle::Ansi, Theme::Dark) => ("\x1b[30;43m", "\x1b[39;49m"),
            (HighlightStyle::Brackets, _) => ("[", "]"),
            _ => ("<mark>", "</mark>"),
        }
    }

    fn text(&self, text: &HighlightedText, theme: Theme) -> String {
        let (open, close) = self.marks(theme);
        text.render_with(open, close)
    }

    pub fn paint(&self, state: &UiState) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "{} {}", state.theme.icon(), summary(state));
        if let Some(status) = &state.status {
            let _ = writeln!(out, "{status}");
        }
        if state.menu_visible {
            out.push_str(&self.paint_menu(state));
        }

        for (index, unit) in state.units.iter().enumerate() {
            match unit {
                DisplayUnit::Placeholder => {
                    let _ = writeln!(out, "{}", self.config.no_results_text);
                }
                DisplayUnit::Card(card) => {
                    self.paint_card(&mut out, index + 1, card, state.theme);
                }
            }
        }

        out
    }

    pub fn paint_menu(&self, state: &UiState) -> String {
        if state.categories.is_empty() {
            return "Categories: (none)\n".to_string();
        }
        format!("Categories: {}\n", state.categories.join(" | "))
    }

    fn paint_card(&self, out: &mut String, number: usize, card: &RecordCard, theme: Theme) {
        let arrow = if card.expanded { "▾" } else { "▸" };
        let _ = writeln!(
            out,
            "[{number}] {arrow} {}",
            self.text(&card.header.primary, theme)
        );
        for alternate in &card.header.alternates {
            let _ = writeln!(out, "{INDENT}{}", self.text(alternate, theme));
        }

        if card.expanded {
            let _ = writeln!(out, "{INDENT}{}", self.config.label_definition_english);
            let _ = writeln!(
                out,
                "{INDENT}  {}",
                self.text(&card.detail.definition_english, theme)
            );
            let _ = writeln!(out, "{INDENT}{}", self.config.label_definition_local);
            let _ = writeln!(
                out,
                "{INDENT}  {}",
                self.text(&card.detail.definition_local, theme)
            );
        }
    }
}

fn summary(state: &UiState) -> String {
    match &state.query {
        Query::All => format!("{} terms", state.matched),
        Query::Keyword(keyword) => format!("{} results for \"{keyword}\"", state.matched),
        Query::Category(tag) => format!("{} terms in category \"{tag}\"", state.matched),
    }
}
