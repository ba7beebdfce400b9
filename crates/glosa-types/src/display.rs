use serde::Serialize;

/// A piece of rendered text, either passed through or emphasized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Span {
    Plain(String),
    Mark(String),
}

/// Text split into plain and emphasized spans.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HighlightedText {
    spans: Vec<Span>,
}

impl HighlightedText {
    pub fn new(spans: Vec<Span>) -> Self {
        Self { spans }
    }

    pub fn plain(text: &str) -> Self {
        if text.is_empty() {
            return Self::default();
        }
        Self {
            spans: vec![Span::Plain(text.to_string())],
        }
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    pub fn mark_count(&self) -> usize {
        self.spans
            .iter()
            .filter(|s| matches!(s, Span::Mark(_)))
            .count()
    }

    /// The text with every mark removed.
    pub fn plain_text(&self) -> String {
        self.spans
            .iter()
            .map(|s| match s {
                Span::Plain(t) | Span::Mark(t) => t.as_str(),
            })
            .collect()
    }

    /// Render with `open`/`close` wrapped around each marked span.
    pub fn render_with(&self, open: &str, close: &str) -> String {
        let mut out = String::new();
        for span in &self.spans {
            match span {
                Span::Plain(t) => out.push_str(t),
                Span::Mark(t) => {
                    out.push_str(open);
                    out.push_str(t);
                    out.push_str(close);
                }
            }
        }
        out
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardHeader {
    pub primary: HighlightedText,
    /// Non-empty alternate-language terms
    pub alternates: Vec<HighlightedText>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardDetail {
    pub definition_english: HighlightedText,
    pub definition_local: HighlightedText,
}

/// Expandable result card for one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordCard {
    pub header: CardHeader,
    pub detail: CardDetail,
    pub expanded: bool,
}

impl RecordCard {
    /// Flip the detail between expanded and collapsed, returning the new state.
    pub fn toggle(&mut self) -> bool {
        self.expanded = !self.expanded;
        self.expanded
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum DisplayUnit {
    /// Shown instead of any card when nothing matched
    Placeholder,
    Card(RecordCard),
}

impl DisplayUnit {
    pub fn as_card(&self) -> Option<&RecordCard> {
        match self {
            DisplayUnit::Card(card) => Some(card),
            DisplayUnit::Placeholder => None,
        }
    }

    pub fn as_card_mut(&mut self) -> Option<&mut RecordCard> {
        match self {
            DisplayUnit::Card(card) => Some(card),
            DisplayUnit::Placeholder => None,
        }
    }
}
