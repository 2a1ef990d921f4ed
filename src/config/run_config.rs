use crate::core::filter::{DEFAULT_NAME_COLUMN, DEFAULT_TAG, DEFAULT_TAG_COLUMN};
use crate::core::{ConfigProvider, ParserMode};
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_column, validate_distinct_paths, validate_non_empty_string, validate_path, Validate,
};
use serde::{Deserialize, Serialize};

pub const DEFAULT_INPUT_PATH: &str = "List of every rated level in Geometry Dash - Rated.csv";
pub const DEFAULT_OUTPUT_PATH: &str = "Extremes.txt";

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    pub input_path: String,
    pub output_path: String,
    pub tag: String,
    pub tag_column: usize,
    pub name_column: usize,
    pub parser: ParserMode,
    pub skip_trailer: bool,
    pub report_path: Option<String>,
    pub monitor: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input_path: DEFAULT_INPUT_PATH.to_string(),
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            tag: DEFAULT_TAG.to_string(),
            tag_column: DEFAULT_TAG_COLUMN,
            name_column: DEFAULT_NAME_COLUMN,
            parser: ParserMode::Split,
            skip_trailer: true,
            report_path: None,
            monitor: false,
        }
    }
}

impl Validate for RunConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input_path)?;
        validate_path("output", &self.output_path)?;
        validate_distinct_paths("output", &self.input_path, &self.output_path)?;
        validate_non_empty_string("tag", &self.tag)?;
        validate_column("tag_column", self.tag_column)?;
        validate_column("name_column", self.name_column)?;

        if let Some(report) = &self.report_path {
            validate_path("report", report)?;
            validate_distinct_paths("report", &self.input_path, report)?;
            validate_distinct_paths("report", &self.output_path, report)?;
        }
        Ok(())
    }
}

impl ConfigProvider for RunConfig {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn name_column(&self) -> usize {
        self.name_column
    }

    fn tag_column(&self) -> usize {
        self.tag_column
    }

    fn tag(&self) -> &str {
        &self.tag
    }

    fn parser_mode(&self) -> ParserMode {
        self.parser
    }

    fn skip_trailer(&self) -> bool {
        self.skip_trailer
    }
}
