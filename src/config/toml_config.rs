use crate::config::run_config::RunConfig;
use crate::core::ParserMode;
use crate::utils::error::{EtlError, Result};
use crate::utils::validation::Validate;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional file-based settings. Every key may be omitted; missing keys keep
/// the built-in defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub filter: FilterConfig,
    #[serde(default)]
    pub output: OutputConfig,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputConfig {
    pub path: Option<String>,
    pub parser: Option<ParserMode>,
    pub skip_trailer: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilterConfig {
    pub tag: Option<String>,
    pub tag_column: Option<usize>,
    pub name_column: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    pub path: Option<String>,
    pub report: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MonitoringConfig {
    pub enabled: bool,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                EtlError::MissingConfigError {
                    field: format!("config file {}", path.display()),
                }
            } else {
                EtlError::IoError(e)
            }
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| EtlError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${LEVELS_DIR})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").map_err(|e| {
            EtlError::ProcessingError {
                message: format!("invalid substitution pattern: {}", e),
            }
        })?;

        let result = re.replace_all(content, |caps: &Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    /// 套用到既有設定，檔案中有寫的欄位才覆蓋
    pub fn apply_to(&self, mut config: RunConfig) -> RunConfig {
        if let Some(path) = &self.input.path {
            config.input_path = path.clone();
        }
        if let Some(parser) = self.input.parser {
            config.parser = parser;
        }
        if let Some(skip) = self.input.skip_trailer {
            config.skip_trailer = skip;
        }
        if let Some(tag) = &self.filter.tag {
            config.tag = tag.clone();
        }
        if let Some(column) = self.filter.tag_column {
            config.tag_column = column;
        }
        if let Some(column) = self.filter.name_column {
            config.name_column = column;
        }
        if let Some(path) = &self.output.path {
            config.output_path = path.clone();
        }
        if let Some(report) = &self.output.report {
            config.report_path = Some(report.clone());
        }
        if let Some(monitoring) = &self.monitoring {
            config.monitor = monitoring.enabled;
        }
        config
    }

    pub fn into_run_config(self) -> RunConfig {
        self.apply_to(RunConfig::default())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.apply_to(RunConfig::default()).validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = TomlConfig::from_toml_str(
            r#"
[filter]
tag = "Insane"
"#,
        )
        .unwrap()
        .into_run_config();

        assert_eq!(config.tag, "Insane");
        assert_eq!(config.tag_column, 4);
        assert_eq!(config.output_path, "Extremes.txt");
    }

    #[test]
    fn test_full_file() {
        let config = TomlConfig::from_toml_str(
            r#"
[input]
path = "rated.csv"
parser = "csv"
skip_trailer = false

[filter]
tag = "HardDemon"
tag_column = 3
name_column = 1

[output]
path = "hard.txt"
report = "hard.json"

[monitoring]
enabled = true
"#,
        )
        .unwrap()
        .into_run_config();

        assert_eq!(config.input_path, "rated.csv");
        assert_eq!(config.parser, ParserMode::Csv);
        assert!(!config.skip_trailer);
        assert_eq!(config.tag_column, 3);
        assert_eq!(config.name_column, 1);
        assert_eq!(config.report_path.as_deref(), Some("hard.json"));
        assert!(config.monitor);
    }

    #[test]
    fn test_env_substitution() {
        std::env::set_var("RATED_EXTREMES_TEST_DIR", "/data/gd");
        let config = TomlConfig::from_toml_str(
            r#"
[input]
path = "${RATED_EXTREMES_TEST_DIR}/rated.csv"
"#,
        )
        .unwrap();
        assert_eq!(config.input.path.as_deref(), Some("/data/gd/rated.csv"));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = TomlConfig::from_toml_str("[filter]\ncolumn = 4\n").unwrap_err();
        assert!(matches!(err, EtlError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_bad_parser_value() {
        assert!(TomlConfig::from_toml_str("[input]\nparser = \"xml\"\n").is_err());
    }
}
