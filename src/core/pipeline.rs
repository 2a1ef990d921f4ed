use crate::core::filter::{parse_csv, parse_split, LevelFilter};
use crate::core::{ConfigProvider, FilterOutcome, LevelRecord, ParserMode, Pipeline, Storage};
use crate::utils::error::{EtlError, Result};

/// Reads the rated-level export, keeps rows carrying the configured tag and
/// writes their names one per line.
pub struct RatedLevelPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> RatedLevelPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn level_filter(&self) -> LevelFilter {
        LevelFilter::new(
            self.config.name_column(),
            self.config.tag_column(),
            self.config.tag(),
        )
    }

    async fn read_input(&self) -> Result<String> {
        let path = self.config.input_path();
        let bytes = match self.storage.read_file(path).await {
            Ok(bytes) => bytes,
            Err(EtlError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(EtlError::InputNotFound {
                    path: path.to_string(),
                })
            }
            Err(e) => return Err(e),
        };

        // 固定使用 UTF-8，不做編碼偵測
        String::from_utf8(bytes).map_err(|source| EtlError::EncodingError {
            path: path.to_string(),
            source,
        })
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for RatedLevelPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<LevelRecord>> {
        tracing::debug!("Reading input file: {}", self.config.input_path());
        let text = self.read_input().await?;

        let skip_trailer = self.config.skip_trailer();
        let records = match self.config.parser_mode() {
            ParserMode::Split => parse_split(&text, skip_trailer),
            ParserMode::Csv => parse_csv(text.as_bytes(), skip_trailer)?,
        };

        tracing::debug!(
            "Parsed {} data rows with {} parser",
            records.len(),
            self.config.parser_mode()
        );
        Ok(records)
    }

    async fn transform(&self, records: Vec<LevelRecord>) -> Result<FilterOutcome> {
        let filter = self.level_filter();
        tracing::debug!(
            "Matching column {} against '{}', reporting column {}",
            filter.tag_column,
            filter.tag,
            filter.name_column
        );

        let outcome = filter.apply(records);
        if outcome.rows_skipped_short > 0 {
            tracing::debug!(
                "{} rows had too few fields and were skipped",
                outcome.rows_skipped_short
            );
        }
        Ok(outcome)
    }

    async fn load(&self, outcome: &FilterOutcome) -> Result<String> {
        let output_path = self.config.output_path();
        let content = outcome.render();

        tracing::debug!(
            "Writing {} names ({} bytes) to {}",
            outcome.rows_matched(),
            content.len(),
            output_path
        );
        self.storage
            .write_file(output_path, content.as_bytes())
            .await?;

        Ok(output_path.to_string())
    }
}
