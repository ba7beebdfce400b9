use glosa_types::{CardDetail, CardHeader, DisplayUnit, GlossaryRecord, RecordCard};

use crate::highlight::highlight;

/// One collapsed card per record, or a single placeholder when there are none.
pub fn render(records: &[&GlossaryRecord], keyword: &str) -> Vec<DisplayUnit> {
    if records.is_empty() {
        return vec![DisplayUnit::Placeholder];
    }

    records
        .iter()
        .map(|record| DisplayUnit::Card(render_card(record, keyword)))
        .collect()
}

pub fn render_card(record: &GlossaryRecord, keyword: &str) -> RecordCard {
    RecordCard {
        header: CardHeader {
            primary: highlight(&record.term, keyword),
            alternates: record
                .alternate_terms()
                .map(|term| highlight(term, keyword))
                .collect(),
        },
        detail: CardDetail {
            definition_english: highlight(&record.definition_english, keyword),
            definition_local: highlight(&record.definition_local, keyword),
        },
        expanded: false,
    }
}
