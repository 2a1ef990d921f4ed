pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::{cli::LocalStorage, run_config::RunConfig, toml_config::TomlConfig};

pub use crate::core::{
    etl::{EtlEngine, EtlSummary},
    filter::LevelFilter,
    pipeline::RatedLevelPipeline,
    report::RunReport,
};
pub use crate::domain::model::{FilterOutcome, LevelRecord};
pub use crate::domain::ports::ParserMode;
pub use crate::utils::error::{EtlError, Result};
