use crate::core::etl::EtlSummary;
use crate::core::{ConfigProvider, FilterOutcome, ParserMode, Storage};
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// JSON record of a single run, written next to the name list on request.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub input_path: String,
    pub output_path: String,
    pub tag: String,
    pub tag_column: usize,
    pub name_column: usize,
    pub parser: ParserMode,
    pub rows_considered: usize,
    pub rows_matched: usize,
    pub rows_skipped_short: usize,
    pub elapsed_ms: u128,
    pub names: Vec<String>,
    pub finished_at: DateTime<Utc>,
}

impl RunReport {
    pub fn new<C: ConfigProvider>(config: &C, summary: &EtlSummary, outcome: &FilterOutcome) -> Self {
        Self {
            input_path: config.input_path().to_string(),
            output_path: summary.output_path.clone(),
            tag: config.tag().to_string(),
            tag_column: config.tag_column(),
            name_column: config.name_column(),
            parser: config.parser_mode(),
            rows_considered: summary.rows_considered,
            rows_matched: summary.rows_matched,
            rows_skipped_short: summary.rows_skipped_short,
            elapsed_ms: summary.elapsed.as_millis(),
            names: outcome.names.clone(),
            finished_at: Utc::now(),
        }
    }

    pub async fn write<S: Storage>(&self, storage: &S, path: &str) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        storage.write_file(path, json.as_bytes()).await?;
        tracing::debug!("Run report written to {}", path);
        Ok(())
    }
}
