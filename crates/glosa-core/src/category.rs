use glosa_types::GlossaryRecord;

/// Trimmed tags of a record's category list. Empty category has no tags.
pub fn category_tags(record: &GlossaryRecord) -> impl Iterator<Item = &str> {
    let category = record.category.as_str();
    (!category.is_empty())
        .then(|| category.split(',').map(str::trim))
        .into_iter()
        .flatten()
}

/// Whether one of the record's tags equals `tag`, ignoring case.
pub fn has_category(record: &GlossaryRecord, tag: &str) -> bool {
    let tag = tag.to_lowercase();
    category_tags(record).any(|t| t.to_lowercase() == tag)
}

/// Records tagged with `tag`, in input order. Substrings do not count:
/// "security" does not select "securities".
pub fn filter_by_category<'a>(tag: &str, records: &'a [GlossaryRecord]) -> Vec<&'a GlossaryRecord> {
    let found: Vec<&GlossaryRecord> = records.iter().filter(|r| has_category(r, tag)).collect();
    tracing::debug!("category '{}': {} records", tag, found.len());
    found
}

/// Distinct non-empty tags in first-seen order; the first spelling wins.
pub fn collect_categories(records: &[GlossaryRecord]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut categories = Vec::new();

    for tag in records.iter().flat_map(category_tags) {
        if !tag.is_empty() && seen.insert(tag.to_lowercase()) {
            categories.push(tag.to_string());
        }
    }

    categories
}
