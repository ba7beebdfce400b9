use anyhow::Context;
use glosa_config::Config;
use glosa_core::{CsvParser, GlossaryStore};
use glosa_io::source_from_config;

/// Fetch the configured document and build a store from it.
pub async fn load_store(config: &Config) -> anyhow::Result<GlossaryStore> {
    let source = source_from_config(&config.source)?;
    tracing::info!("Loading glossary from {}", source.describe());

    let text = source
        .fetch()
        .await
        .with_context(|| format!("failed to fetch glossary from {}", source.describe()))?;

    let parser = CsvParser::from_config(&config.parser);
    let store = GlossaryStore::load(&text, &parser);
    tracing::info!(
        "Loaded {} records in {} categories",
        store.len(),
        store.categories().len()
    );

    Ok(store)
}
