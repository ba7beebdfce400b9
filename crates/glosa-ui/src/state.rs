use glosa_config::ui::Theme;
use glosa_types::{DisplayUnit, Query, ResultSet};

/// Presentation state, owned by the UI loop.
pub struct UiState {
    pub units: Vec<DisplayUnit>,
    pub query: Query,
    pub matched: usize,
    pub theme: Theme,
    /// Category menu shown under the status line
    pub menu_visible: bool,
    pub categories: Vec<String>,
    pub status: Option<String>,
}

impl UiState {
    pub fn new(theme: Theme) -> Self {
        Self {
            units: Vec::new(),
            query: Query::All,
            matched: 0,
            theme,
            menu_visible: false,
            categories: Vec::new(),
            status: None,
        }
    }

    /// Replace the displayed results. Every card starts collapsed and any
    /// status line from earlier input is dropped.
    pub fn show_results(&mut self, results: ResultSet) {
        self.status = None;
        self.units = results.units;
        self.query = results.query;
        self.matched = results.matched;
    }

    /// Flip one card's detail. `None` when there is no card at `index`.
    pub fn toggle_detail(&mut self, index: usize) -> Option<bool> {
        self.units
            .get_mut(index)
            .and_then(DisplayUnit::as_card_mut)
            .map(|card| card.toggle())
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.menu_visible = !self.menu_visible;
        self.menu_visible
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

#[cfg(test)]
mod tests {
    use glosa_types::{CardDetail, CardHeader, HighlightedText, RecordCard};

    use super::*;

    fn card(term: &str) -> DisplayUnit {
        DisplayUnit::Card(RecordCard {
            header: CardHeader {
                primary: HighlightedText::plain(term),
                alternates: Vec::new(),
            },
            detail: CardDetail {
                definition_english: HighlightedText::default(),
                definition_local: HighlightedText::default(),
            },
            expanded: false,
        })
    }

    fn results(units: Vec<DisplayUnit>) -> ResultSet {
        ResultSet {
            query: Query::Keyword("a".to_string()),
            matched: units.len(),
            units,
        }
    }

    #[test]
    fn toggle_flips_only_the_chosen_card() {
        let mut state = UiState::default();
        state.show_results(results(vec![card("a"), card("b"), card("c")]));

        assert_eq!(state.toggle_detail(1), Some(true));

        let expanded: Vec<bool> = state
            .units
            .iter()
            .map(|u| u.as_card().unwrap().expanded)
            .collect();
        assert_eq!(expanded, vec![false, true, false]);

        assert_eq!(state.toggle_detail(1), Some(false));
    }

    #[test]
    fn toggle_out_of_range_or_placeholder_is_none() {
        let mut state = UiState::default();
        state.show_results(results(vec![DisplayUnit::Placeholder]));

        assert_eq!(state.toggle_detail(0), None);
        assert_eq!(state.toggle_detail(7), None);
    }

    #[test]
    fn new_results_replace_expanded_state() {
        let mut state = UiState::default();
        state.show_results(results(vec![card("a")]));
        state.toggle_detail(0);

        state.show_results(results(vec![card("a")]));

        assert!(!state.units[0].as_card().unwrap().expanded);
    }

    #[test]
    fn theme_and_menu_toggle_back_and_forth() {
        let mut state = UiState::new(Theme::Light);

        assert_eq!(state.toggle_theme(), Theme::Dark);
        assert_eq!(state.theme.icon(), "☀️");
        assert_eq!(state.toggle_theme(), Theme::Light);

        assert!(state.toggle_menu());
        assert!(!state.toggle_menu());
    }
}
