mod display;
mod record;
mod types;

pub use display::{CardDetail, CardHeader, DisplayUnit, HighlightedText, RecordCard, Span};
pub use record::GlossaryRecord;
pub use types::{AppEvent, Query, ResultSet, UiEvent};
