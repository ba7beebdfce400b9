use std::io::Write;

use glosa_config::Config;
use glosa_core::{GlossaryStore, SearchTier, classify, render};
use glosa_types::{DisplayUnit, GlossaryRecord, Query, ResultSet};
use glosa_ui::paint::Painter;
use glosa_ui::state::UiState;
use serde::Serialize;

use crate::Cli;
use crate::loader::load_store;

#[derive(Serialize)]
struct ExplainedRecord<'a> {
    tier: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    position: Option<usize>,
    #[serde(flatten)]
    record: &'a GlossaryRecord,
}

/// `--query` / `--category`: print the matches once and exit.
pub async fn run_once(cli: &Cli, config: &Config) -> anyhow::Result<()> {
    let store = load_store(config).await?;
    let query = query_from_cli(cli);

    let output = if cli.json {
        format_json(&store, &query, cli.explain)?
    } else {
        format_text(&store, &query, cli.explain, config)
    };

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn query_from_cli(cli: &Cli) -> Query {
    match (&cli.query, &cli.category) {
        (Some(keyword), _) => Query::Keyword(keyword.clone()),
        (None, Some(tag)) => Query::Category(tag.clone()),
        (None, None) => Query::All,
    }
}

fn explain(keyword: &str, record: &GlossaryRecord) -> (&'static str, Option<usize>) {
    let tier = classify(keyword, record);
    let position = match tier {
        SearchTier::Phrase { position } => Some(position),
        _ => None,
    };
    (tier.label(), position)
}

pub fn format_json(store: &GlossaryStore, query: &Query, with_tiers: bool) -> anyhow::Result<String> {
    let records = store.run(query);

    let mut json = match query {
        Query::Keyword(keyword) if with_tiers && !keyword.is_empty() => {
            let explained: Vec<ExplainedRecord> = records
                .into_iter()
                .map(|record| {
                    let (tier, position) = explain(keyword, record);
                    ExplainedRecord {
                        tier,
                        position,
                        record,
                    }
                })
                .collect();
            serde_json::to_string_pretty(&explained)?
        }
        _ => serde_json::to_string_pretty(&records)?,
    };
    json.push('\n');
    Ok(json)
}

/// Cards come out expanded since there is nothing to click.
pub fn format_text(store: &GlossaryStore, query: &Query, with_tiers: bool, config: &Config) -> String {
    let records = store.run(query);
    let mut units = render(&records, query.keyword());
    for card in units.iter_mut().filter_map(DisplayUnit::as_card_mut) {
        card.expanded = true;
    }

    let mut state = UiState::new(config.ui.theme);
    state.show_results(ResultSet {
        query: query.clone(),
        matched: records.len(),
        units,
    });

    let painter = Painter::new(config.ui.clone(), false);
    let mut out = painter.paint(&state);

    if let Query::Keyword(keyword) = query
        && with_tiers
        && !keyword.is_empty()
    {
        out.push_str("\nRanking:\n");
        for (number, record) in records.iter().enumerate() {
            let (tier, position) = explain(keyword, record);
            match position {
                Some(position) => out.push_str(&format!(
                    "  {:>3}. {:<10} @{:<3} {}\n",
                    number + 1,
                    tier,
                    position,
                    record.term
                )),
                None => out.push_str(&format!(
                    "  {:>3}. {:<10}      {}\n",
                    number + 1,
                    tier,
                    record.term
                )),
            }
        }
    }

    out
}
