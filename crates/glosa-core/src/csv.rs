//! Delimited-text parser for spreadsheet CSV exports.
//!
//! Single pass, never fails: unbalanced quotes just leave the rest of the
//! input inside (or outside) a quoted field.

use glosa_config::parser::ParserConfig;

pub type ParsedRow = Vec<String>;

#[derive(Debug, Clone, Copy)]
pub struct CsvParser {
    delimiter: char,
    quote: char,
    flush_trailing_row: bool,
}

impl Default for CsvParser {
    fn default() -> Self {
        Self {
            delimiter: ',',
            quote: '"',
            flush_trailing_row: true,
        }
    }
}

impl CsvParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &ParserConfig) -> Self {
        Self::default().flush_trailing_row(config.flush_trailing_row)
    }

    /// Whether a last row without a line break is kept (default) or dropped.
    pub fn flush_trailing_row(mut self, flush: bool) -> Self {
        self.flush_trailing_row = flush;
        self
    }

    pub fn parse(&self, text: &str) -> Vec<ParsedRow> {
        let mut rows = Vec::new();
        let mut row: ParsedRow = Vec::new();
        let mut field = String::new();
        let mut inside_quotes = false;

        let mut chars = text.chars().peekable();
        while let Some(c) = chars.next() {
            if c == self.quote {
                if inside_quotes && chars.peek() == Some(&self.quote) {
                    field.push(self.quote);
                    chars.next();
                } else {
                    inside_quotes = !inside_quotes;
                }
            } else if c == self.delimiter && !inside_quotes {
                row.push(field.trim().to_string());
                field.clear();
            } else if (c == '\n' || c == '\r') && !inside_quotes {
                end_row(&mut rows, &mut row, &mut field);
            } else {
                field.push(c);
            }
        }

        if self.flush_trailing_row {
            end_row(&mut rows, &mut row, &mut field);
        } else if !field.is_empty() || !row.is_empty() {
            tracing::debug!("Dropping unterminated trailing row");
        }

        rows
    }
}

/// Closes the current row unless nothing was read since the previous one.
fn end_row(rows: &mut Vec<ParsedRow>, row: &mut ParsedRow, field: &mut String) {
    if !field.is_empty() || !row.is_empty() {
        row.push(field.trim().to_string());
        rows.push(std::mem::take(row));
    }
    field.clear();
}

/// Parse with the default dialect.
pub fn parse(text: &str) -> Vec<ParsedRow> {
    CsvParser::default().parse(text)
}
