use serde::{Deserialize, Serialize};

/// One glossary entry, built from a single spreadsheet row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlossaryRecord {
    /// Primary headword
    pub term: String,
    pub term_english: String,
    pub term_local: String,
    pub definition_english: String,
    pub definition_local: String,
    /// Comma-separated category tags
    pub category: String,
}

impl GlossaryRecord {
    /// The three headword variants, primary first.
    pub fn terms(&self) -> [&str; 3] {
        [&self.term, &self.term_english, &self.term_local]
    }

    pub fn definitions(&self) -> [&str; 2] {
        [&self.definition_english, &self.definition_local]
    }

    /// Alternate-language headwords that are not empty.
    pub fn alternate_terms(&self) -> impl Iterator<Item = &str> {
        [self.term_english.as_str(), self.term_local.as_str()]
            .into_iter()
            .filter(|t| !t.is_empty())
    }
}
