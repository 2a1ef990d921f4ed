use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Input file not found: {path}")]
    InputNotFound { path: String },

    #[error("Input file '{path}' is not valid UTF-8: {source}")]
    EncodingError {
        path: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    Data,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// 依錯誤嚴重程度決定退出碼，一律非零
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl EtlError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::ConfigValidationError { .. }
            | EtlError::InvalidConfigValueError { .. }
            | EtlError::MissingConfigError { .. } => ErrorCategory::Configuration,
            EtlError::InputNotFound { .. } | EtlError::EncodingError { .. } => {
                ErrorCategory::Input
            }
            EtlError::CsvError(_) | EtlError::ProcessingError { .. } => ErrorCategory::Data,
            EtlError::IoError(_) | EtlError::SerializationError(_) => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 使用者可修正的輸入問題
            EtlError::ConfigValidationError { .. }
            | EtlError::InvalidConfigValueError { .. }
            | EtlError::MissingConfigError { .. }
            | EtlError::InputNotFound { .. }
            | EtlError::EncodingError { .. }
            | EtlError::CsvError(_) => ErrorSeverity::High,
            EtlError::ProcessingError { .. } | EtlError::SerializationError(_) => {
                ErrorSeverity::Medium
            }
            EtlError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            EtlError::InputNotFound { path } => format!(
                "Check that '{}' exists, or pass another file with --input",
                path
            ),
            EtlError::EncodingError { .. } => {
                "Re-export the spreadsheet as UTF-8 CSV".to_string()
            }
            EtlError::CsvError(_) => {
                "Try --parser split, or fix the malformed quoting in the CSV export".to_string()
            }
            EtlError::ConfigValidationError { field, .. }
            | EtlError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' in the config file or CLI flags", field)
            }
            EtlError::MissingConfigError { field } => {
                format!("Provide '{}' in the config file or on the command line", field)
            }
            EtlError::IoError(_) => {
                "Check file permissions and free disk space for the output path".to_string()
            }
            EtlError::SerializationError(_) => {
                "Run again without --report to skip the JSON report".to_string()
            }
            EtlError::ProcessingError { .. } => {
                "Run with --verbose to see which rows were processed".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::Input => format!("Cannot read input: {}", self),
            ErrorCategory::Data => format!("Cannot process rows: {}", self),
            ErrorCategory::Output => format!("Cannot write output: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
