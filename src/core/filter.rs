//! Row splitting and tag matching for the rated-level export.
//!
//! The export has a header line first and a trailing artifact line last; both are
//! dropped before any row is looked at. Rows are matched on an exact tag value in
//! one column and reported by the value of another column.

use crate::domain::model::{FilterOutcome, LevelRecord};
use crate::utils::error::Result;
use regex::Regex;
use std::sync::LazyLock;

pub const DEFAULT_TAG: &str = "ExtreDemon10*";
pub const DEFAULT_NAME_COLUMN: usize = 0;
pub const DEFAULT_TAG_COLUMN: usize = 4;

static LINE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r\n|\r|\n").expect("line break pattern is valid"));

/// Splits on every comma. Quotes are not interpreted.
pub fn split_line(line: &str) -> Vec<String> {
    line.split(',').map(str::to_string).collect()
}

/// Splits on `\r\n`, `\n` or a lone `\r`. A terminator at the very end does not
/// open another line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = LINE_BREAK.split(text).collect();
    if lines.last() == Some(&"") {
        lines.pop();
    }
    lines
}

/// Lines between the header and the trailer, paired with 1-based line numbers.
pub fn body_lines(text: &str, skip_trailer: bool) -> Vec<(usize, &str)> {
    let lines = split_lines(text);
    let end = if skip_trailer {
        lines.len().saturating_sub(1)
    } else {
        lines.len()
    };

    (1..end).map(|i| (i + 1, lines[i])).collect()
}

pub fn parse_split(text: &str, skip_trailer: bool) -> Vec<LevelRecord> {
    body_lines(text, skip_trailer)
        .into_iter()
        .map(|(line_number, line)| LevelRecord::new(line_number, split_line(line)))
        .collect()
}

/// Quote-aware parsing. Blank lines are ignored by the reader, so the header is
/// the first non-empty record and the trailer the last one.
pub fn parse_csv(data: &[u8], skip_trailer: bool) -> Result<Vec<LevelRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(data);

    let mut records = Vec::new();
    for (index, row) in reader.records().enumerate() {
        let row = row?;
        let line_number = row
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(index + 1);
        records.push(LevelRecord::new(
            line_number,
            row.iter().map(str::to_string).collect(),
        ));
    }

    if skip_trailer {
        records.pop();
    }
    if !records.is_empty() {
        records.remove(0);
    }

    Ok(records)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelFilter {
    pub name_column: usize,
    pub tag_column: usize,
    pub tag: String,
}

impl Default for LevelFilter {
    fn default() -> Self {
        Self::new(DEFAULT_NAME_COLUMN, DEFAULT_TAG_COLUMN, DEFAULT_TAG)
    }
}

impl LevelFilter {
    pub fn new(name_column: usize, tag_column: usize, tag: impl Into<String>) -> Self {
        Self {
            name_column,
            tag_column,
            tag: tag.into(),
        }
    }

    /// Exact, case-sensitive comparison; a row without the tag column never matches.
    pub fn matches(&self, record: &LevelRecord) -> bool {
        record.field(self.tag_column) == Some(self.tag.as_str())
    }

    pub fn apply(&self, records: Vec<LevelRecord>) -> FilterOutcome {
        let mut outcome = FilterOutcome::default();

        for record in records {
            outcome.rows_considered += 1;

            if record.field_count() <= self.tag_column {
                tracing::trace!(
                    "Skipping line {}: only {} fields",
                    record.line_number,
                    record.field_count()
                );
                outcome.rows_skipped_short += 1;
                continue;
            }

            if !self.matches(&record) {
                continue;
            }

            match record.field(self.name_column) {
                Some(name) => outcome.names.push(name.to_string()),
                None => {
                    tracing::debug!(
                        "Line {} matched '{}' but has no name column {}",
                        record.line_number,
                        self.tag,
                        self.name_column
                    );
                    outcome.rows_skipped_short += 1;
                }
            }
        }

        outcome
    }
}
