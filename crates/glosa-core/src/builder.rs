use glosa_types::GlossaryRecord;

use crate::csv::ParsedRow;

/// Turns parsed rows into records. The first row is the header and is
/// skipped without looking at it; columns are taken by position:
/// term, English term, local term, English definition, local definition,
/// category. Missing columns become empty strings, extra ones are ignored.
pub fn build(rows: Vec<ParsedRow>) -> Vec<GlossaryRecord> {
    let records: Vec<GlossaryRecord> = rows.into_iter().skip(1).map(build_record).collect();
    tracing::debug!("Built {} glossary records", records.len());
    records
}

fn build_record(row: ParsedRow) -> GlossaryRecord {
    let mut fields = row.into_iter();
    let mut next = || fields.next().unwrap_or_default();

    GlossaryRecord {
        term: next(),
        term_english: next(),
        term_local: next(),
        definition_english: next(),
        definition_local: next(),
        category: next(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csv::parse;

    const SHEET: &str = "Term,Term (EN),Term (ID),Definition (EN),Definition (ID),Category\n\
API,Application Programming Interface,Antarmuka Pemrograman Aplikasi,\"A contract, between programs\",Kontrak antar program,\"Software, Web\"\n\
Firewall,Firewall,Tembok Api,Filters traffic,Menyaring lalu lintas,Security\n";

    #[test]
    fn one_record_per_data_row_in_order() {
        let records = build(parse(SHEET));

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].term, "API");
        assert_eq!(records[0].definition_english, "A contract, between programs");
        assert_eq!(records[0].category, "Software, Web");
        assert_eq!(records[1].term, "Firewall");
        assert_eq!(records[1].term_local, "Tembok Api");
    }

    #[test]
    fn header_is_skipped_whatever_it_contains() {
        let records = build(parse("API,x\nDNS,y\n"));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].term, "DNS");
    }

    #[test]
    fn short_rows_fill_with_empty_strings() {
        let records = build(parse("h\nCache,Cache\n"));

        assert_eq!(records[0].term, "Cache");
        assert_eq!(records[0].term_english, "Cache");
        assert!(records[0].term_local.is_empty());
        assert!(records[0].definition_local.is_empty());
        assert!(records[0].category.is_empty());
    }

    #[test]
    fn extra_columns_are_ignored() {
        let records = build(parse("h\na,b,c,d,e,f,g,h\n"));
        assert_eq!(records[0].category, "f");
    }

    #[test]
    fn no_rows_or_header_only_gives_nothing() {
        assert!(build(Vec::new()).is_empty());
        assert!(build(parse("only,a,header\n")).is_empty());
    }
}
