//! Tiered keyword search over glossary records.
//!
//! A record lands in exactly one tier: its headword equals the keyword
//! (exact), contains it (phrase), or only its definitions contain it.
//! Phrase hits are ordered by how early the keyword appears.

use glosa_types::GlossaryRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchTier {
    Exact,
    /// Earliest character index of the keyword in any headword
    Phrase { position: usize },
    DefinitionMatch,
    NoMatch,
}

impl SearchTier {
    pub fn label(&self) -> &'static str {
        match self {
            SearchTier::Exact => "exact",
            SearchTier::Phrase { .. } => "phrase",
            SearchTier::DefinitionMatch => "definition",
            SearchTier::NoMatch => "none",
        }
    }
}

/// Classify one record. `keyword` is compared case-insensitively.
pub fn classify(keyword: &str, record: &GlossaryRecord) -> SearchTier {
    classify_lowered(&keyword.to_lowercase(), record)
}

fn classify_lowered(keyword: &str, record: &GlossaryRecord) -> SearchTier {
    let terms = record.terms().map(str::to_lowercase);

    if terms.iter().any(|t| t == keyword) {
        return SearchTier::Exact;
    }

    if let Some(position) = terms.iter().filter_map(|t| char_position(t, keyword)).min() {
        return SearchTier::Phrase { position };
    }

    if record
        .definitions()
        .iter()
        .any(|d| d.to_lowercase().contains(keyword))
    {
        return SearchTier::DefinitionMatch;
    }

    SearchTier::NoMatch
}

/// Character index of the first occurrence of `needle` in `haystack`.
fn char_position(haystack: &str, needle: &str) -> Option<usize> {
    haystack
        .find(needle)
        .map(|byte| haystack[..byte].chars().count())
}

/// Records matching `keyword`: exact hits, then phrase hits by position,
/// then definition hits. Within a tier the input order is kept.
pub fn search<'a>(keyword: &str, records: &'a [GlossaryRecord]) -> Vec<&'a GlossaryRecord> {
    let keyword = keyword.to_lowercase();

    let mut exact = Vec::new();
    let mut phrase = Vec::new();
    let mut definition = Vec::new();

    for record in records {
        match classify_lowered(&keyword, record) {
            SearchTier::Exact => exact.push(record),
            SearchTier::Phrase { position } => phrase.push((position, record)),
            SearchTier::DefinitionMatch => definition.push(record),
            SearchTier::NoMatch => {}
        }
    }

    // sort_by_key is stable: equal positions keep input order
    phrase.sort_by_key(|(position, _)| *position);

    tracing::debug!(
        "search '{}': {} exact, {} phrase, {} definition",
        keyword,
        exact.len(),
        phrase.len(),
        definition.len()
    );

    exact
        .into_iter()
        .chain(phrase.into_iter().map(|(_, record)| record))
        .chain(definition)
        .collect()
}
