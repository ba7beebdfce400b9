//! One-shot output formatting

use glosa_config::Config;
use glosa_config::ui::HighlightStyle;
use glosa_types::Query;

use super::sample_store;
use crate::oneshot::{format_json, format_text};

fn bracket_config() -> Config {
    let mut config = Config::default();
    config.ui.highlight = HighlightStyle::Brackets;
    config
}

#[test]
fn text_output_expands_cards() {
    let text = format_text(
        &sample_store(),
        &Query::Keyword("firewall".to_string()),
        false,
        &bracket_config(),
    );

    assert!(text.contains("1 results for \"firewall\""));
    assert!(text.contains("[1] ▾ [Firewall]"));
    assert!(text.contains("Definisi (ID):"));
    assert!(!text.contains("Ranking:"));
}

#[test]
fn text_output_explains_ranking() {
    let text = format_text(
        &sample_store(),
        &Query::Keyword("api".to_string()),
        true,
        &bracket_config(),
    );

    assert!(text.contains("Ranking:"));
    assert!(text.contains("exact"));
    assert!(text.contains("phrase"));
}

#[test]
fn json_output_lists_records() {
    let json = format_json(&sample_store(), &Query::Category("web".to_string()), false).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let terms: Vec<&str> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["term"].as_str().unwrap())
        .collect();
    assert_eq!(terms, vec!["API", "Rapid API"]);
}

#[test]
fn json_output_with_tiers() {
    let json = format_json(&sample_store(), &Query::Keyword("api".to_string()), true).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let entries = value.as_array().unwrap();

    assert_eq!(entries[0]["tier"], "exact");
    assert_eq!(entries[1]["tier"], "phrase");
    assert_eq!(entries[1]["position"], 6);
    assert_eq!(entries[1]["term"], "Rapid API");
    assert!(entries[0].get("position").is_none());
}

#[test]
fn empty_result_prints_placeholder() {
    let text = format_text(
        &sample_store(),
        &Query::Keyword("zzz".to_string()),
        false,
        &bracket_config(),
    );
    assert!(text.contains("Tidak ada hasil ditemukan."));
}
