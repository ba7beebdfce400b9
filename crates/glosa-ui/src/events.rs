use glosa_types::{AppEvent, UiEvent};

use crate::paint::{HELP, Painter};
use crate::state::UiState;

/// What the UI loop should do after an event.
#[derive(Debug, PartialEq, Eq)]
pub enum UiOutcome {
    Draw(String),
    Nothing,
    Close,
}

pub fn handle_events(event: AppEvent, state: &mut UiState, painter: &Painter) -> UiOutcome {
    match event {
        AppEvent::ShowResults(results) => {
            tracing::debug!("[UI] Showing {} units", results.units.len());
            state.show_results(results);
            UiOutcome::Draw(painter.paint(state))
        }
        AppEvent::DataLoaded {
            records,
            categories,
        } => {
            tracing::debug!("[UI] Data loaded: {} records", records);
            state.categories = categories;
            state.status = None;
            UiOutcome::Nothing
        }
        AppEvent::Status(status) => {
            state.status = Some(status.clone());
            UiOutcome::Draw(format!("{status}\n"))
        }
        AppEvent::UiEvent(UiEvent::ToggleDetail(index)) => match state.toggle_detail(index) {
            Some(expanded) => {
                tracing::debug!("[UI] Card {} expanded: {}", index + 1, expanded);
                UiOutcome::Draw(painter.paint(state))
            }
            None => UiOutcome::Draw(format!("No card number {}\n", index + 1)),
        },
        AppEvent::UiEvent(UiEvent::ToggleTheme) => {
            let theme = state.toggle_theme();
            tracing::debug!("[UI] Theme: {:?}", theme);
            UiOutcome::Draw(painter.paint(state))
        }
        AppEvent::UiEvent(UiEvent::ToggleMenu) => {
            if state.toggle_menu() {
                UiOutcome::Draw(painter.paint_menu(state))
            } else {
                UiOutcome::Nothing
            }
        }
        AppEvent::UiEvent(UiEvent::Help) => UiOutcome::Draw(format!("{HELP}\n")),
        AppEvent::UiEvent(UiEvent::Quit) => UiOutcome::Close,
        AppEvent::UiEvent(_) => UiOutcome::Nothing,
    }
}

#[cfg(test)]
mod tests {
    use glosa_config::ui::{HighlightStyle, UiConfig};
    use glosa_types::{DisplayUnit, Query, ResultSet};

    use super::*;

    fn painter() -> Painter {
        let config = UiConfig {
            highlight: HighlightStyle::Brackets,
            ..UiConfig::default()
        };
        Painter::new(config, false)
    }

    #[test]
    fn results_are_stored_and_drawn() {
        let mut state = UiState::default();
        let outcome = handle_events(
            AppEvent::ShowResults(ResultSet {
                query: Query::Category("web".to_string()),
                units: vec![DisplayUnit::Placeholder],
                matched: 0,
            }),
            &mut state,
            &painter(),
        );

        assert_eq!(state.units, vec![DisplayUnit::Placeholder]);
        match outcome {
            UiOutcome::Draw(text) => assert!(text.contains("0 terms in category \"web\"")),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn toggling_a_missing_card_reports_it() {
        let mut state = UiState::default();
        let outcome = handle_events(
            AppEvent::UiEvent(UiEvent::ToggleDetail(2)),
            &mut state,
            &painter(),
        );
        assert_eq!(outcome, UiOutcome::Draw("No card number 3\n".to_string()));
    }

    #[test]
    fn data_loaded_fills_category_menu() {
        let mut state = UiState::default();
        state.status = Some("Loading".to_string());

        handle_events(
            AppEvent::DataLoaded {
                records: 2,
                categories: vec!["Web".to_string()],
            },
            &mut state,
            &painter(),
        );

        assert_eq!(state.categories, vec!["Web"]);
        assert!(state.status.is_none());
    }

    #[test]
    fn quit_closes_the_ui() {
        let mut state = UiState::default();
        let outcome = handle_events(AppEvent::UiEvent(UiEvent::Quit), &mut state, &painter());
        assert_eq!(outcome, UiOutcome::Close);
    }

    #[test]
    fn status_is_dropped_by_the_next_results() {
        let painter = painter();
        let mut state = UiState::default();

        let outcome = handle_events(
            AppEvent::Status("Unknown command :frobnicate (type :help)".to_string()),
            &mut state,
            &painter,
        );
        assert_eq!(
            outcome,
            UiOutcome::Draw("Unknown command :frobnicate (type :help)\n".to_string())
        );

        let outcome = handle_events(
            AppEvent::ShowResults(ResultSet {
                query: Query::Keyword("api".to_string()),
                units: vec![DisplayUnit::Placeholder],
                matched: 0,
            }),
            &mut state,
            &painter,
        );

        assert!(state.status.is_none());
        match outcome {
            UiOutcome::Draw(text) => {
                assert!(text.contains("0 results for \"api\""));
                assert!(!text.contains("frobnicate"));
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }
}
