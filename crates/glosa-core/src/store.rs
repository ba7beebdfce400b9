use glosa_types::{GlossaryRecord, Query};

use crate::builder::build;
use crate::category::{collect_categories, filter_by_category};
use crate::csv::CsvParser;
use crate::search::search;

/// Immutable record set for one load of the glossary.
///
/// A reload builds a new store and replaces the old one as a whole.
#[derive(Debug, Clone, Default)]
pub struct GlossaryStore {
    records: Vec<GlossaryRecord>,
    categories: Vec<String>,
}

impl GlossaryStore {
    pub fn from_records(records: Vec<GlossaryRecord>) -> Self {
        let categories = collect_categories(&records);
        Self {
            records,
            categories,
        }
    }

    /// Parse a CSV document (header row first) into a store.
    pub fn load(text: &str, parser: &CsvParser) -> Self {
        let rows = parser.parse(text);
        tracing::debug!("Parsed {} rows", rows.len());
        Self::from_records(build(rows))
    }

    pub fn records(&self) -> &[GlossaryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct category tags, in first-seen order.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn all(&self) -> Vec<&GlossaryRecord> {
        self.records.iter().collect()
    }

    /// Records for a query. An empty keyword shows everything unranked.
    pub fn run(&self, query: &Query) -> Vec<&GlossaryRecord> {
        match query {
            Query::All => self.all(),
            Query::Keyword(keyword) if keyword.is_empty() => self.all(),
            Query::Keyword(keyword) => search(keyword, &self.records),
            Query::Category(tag) => filter_by_category(tag, &self.records),
        }
    }
}
