use crate::domain::model::{FilterOutcome, LevelRecord};
use crate::utils::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// How data rows are split into fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ParserMode {
    /// Split on every comma, ignoring quotes.
    #[default]
    Split,
    /// RFC 4180 parsing with quoted fields.
    Csv,
}

impl fmt::Display for ParserMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParserMode::Split => write!(f, "split"),
            ParserMode::Csv => write!(f, "csv"),
        }
    }
}

impl FromStr for ParserMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "split" => Ok(ParserMode::Split),
            "csv" => Ok(ParserMode::Csv),
            other => Err(format!("unknown parser mode '{}'", other)),
        }
    }
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn name_column(&self) -> usize;
    fn tag_column(&self) -> usize;
    fn tag(&self) -> &str;
    fn parser_mode(&self) -> ParserMode;
    fn skip_trailer(&self) -> bool;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<LevelRecord>>;
    async fn transform(&self, records: Vec<LevelRecord>) -> Result<FilterOutcome>;
    async fn load(&self, outcome: &FilterOutcome) -> Result<String>;
}
