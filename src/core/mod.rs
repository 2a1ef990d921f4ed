pub mod etl;
pub mod filter;
pub mod pipeline;
pub mod report;

pub use crate::domain::model::{FilterOutcome, LevelRecord};
pub use crate::domain::ports::{ConfigProvider, ParserMode, Pipeline, Storage};
pub use crate::utils::error::Result;
