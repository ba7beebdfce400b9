use crate::display::DisplayUnit;

/// What the user asked to see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    All,
    Keyword(String),
    Category(String),
}

impl Query {
    /// Keyword used for highlighting, empty for non-keyword queries.
    pub fn keyword(&self) -> &str {
        match self {
            Query::Keyword(k) => k,
            Query::All | Query::Category(_) => "",
        }
    }
}

/// Rendered answer to a query.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSet {
    pub query: Query,
    pub units: Vec<DisplayUnit>,
    /// Number of matching records
    pub matched: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    UiEvent(UiEvent),
    ShowResults(ResultSet),
    DataLoaded {
        records: usize,
        categories: Vec<String>,
    },
    Status(String),
}

/// Input coming from the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Search(String),
    SelectCategory(String),
    ShowAll,
    ToggleDetail(usize),
    ToggleTheme,
    ToggleMenu,
    Reload,
    Help,
    Quit,
}

impl UiEvent {
    /// Events that only change presentation state and never reach the core.
    pub fn is_presentation_only(&self) -> bool {
        matches!(
            self,
            UiEvent::ToggleDetail(_) | UiEvent::ToggleTheme | UiEvent::ToggleMenu | UiEvent::Help
        )
    }
}
