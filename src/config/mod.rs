pub mod cli;
pub mod run_config;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ParserMode;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use run_config::RunConfig;
#[cfg(feature = "cli")]
use toml_config::TomlConfig;

/// Command line flags. Flags left unset fall back to the config file, then to
/// the built-in defaults.
#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "rated-extremes")]
#[command(about = "List the levels in a rated-level CSV export that carry a given rating tag")]
#[command(version)]
pub struct CliConfig {
    /// Path to the CSV export
    #[arg(short, long)]
    pub input: Option<String>,

    /// Path of the name list to write (overwritten)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Rating tag to match exactly [default: ExtreDemon10*]
    #[arg(short, long)]
    pub tag: Option<String>,

    /// Zero-based column holding the rating tag [default: 4]
    #[arg(long)]
    pub tag_column: Option<usize>,

    /// Zero-based column holding the level name [default: 0]
    #[arg(long)]
    pub name_column: Option<usize>,

    /// Row parser [default: split]
    #[arg(long, value_enum)]
    pub parser: Option<ParserMode>,

    /// Treat the last line as data instead of a trailing artifact
    #[arg(long, overrides_with = "skip_trailer")]
    pub keep_trailer: bool,

    /// Drop the last line even if the config file keeps it
    #[arg(long, overrides_with = "keep_trailer")]
    pub skip_trailer: bool,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Also write a JSON run report to this path
    #[arg(long)]
    pub report: Option<String>,

    /// Print the matches without writing any file
    #[arg(long)]
    pub dry_run: bool,

    #[arg(long, overrides_with = "no_monitor", help = "Log per-phase CPU and memory usage")]
    pub monitor: bool,

    #[arg(long, overrides_with = "monitor", help = "Disable monitoring enabled by the config file")]
    pub no_monitor: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 合併順序：內建預設 < TOML 檔案 < 命令列
    pub fn resolve(&self) -> Result<RunConfig> {
        let base = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                TomlConfig::from_file(path)?.into_run_config()
            }
            None => RunConfig::default(),
        };
        Ok(self.apply_to(base))
    }

    pub fn apply_to(&self, mut config: RunConfig) -> RunConfig {
        if let Some(input) = &self.input {
            config.input_path = input.clone();
        }
        if let Some(output) = &self.output {
            config.output_path = output.clone();
        }
        if let Some(tag) = &self.tag {
            config.tag = tag.clone();
        }
        if let Some(column) = self.tag_column {
            config.tag_column = column;
        }
        if let Some(column) = self.name_column {
            config.name_column = column;
        }
        if let Some(parser) = self.parser {
            config.parser = parser;
        }
        if self.keep_trailer {
            config.skip_trailer = false;
        } else if self.skip_trailer {
            config.skip_trailer = true;
        }
        if let Some(report) = &self.report {
            config.report_path = Some(report.clone());
        }
        if self.monitor {
            config.monitor = true;
        } else if self.no_monitor {
            config.monitor = false;
        }
        config
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_file_values() {
        let file = TomlConfig::from_toml_str(
            r#"
[filter]
tag = "Insane"
tag_column = 3

[output]
path = "insane.txt"
"#,
        )
        .unwrap()
        .into_run_config();

        let cli = CliConfig::parse_from(["rated-extremes", "--tag", "ExtreDemon10*", "--keep-trailer"]);
        let config = cli.apply_to(file);

        assert_eq!(config.tag, "ExtreDemon10*");
        assert_eq!(config.tag_column, 3);
        assert_eq!(config.output_path, "insane.txt");
        assert!(!config.skip_trailer);
    }

    #[test]
    fn test_flags_can_switch_file_toggles_off() {
        let file = TomlConfig::from_toml_str(
            r#"
[input]
skip_trailer = false

[monitoring]
enabled = true
"#,
        )
        .unwrap()
        .into_run_config();
        assert!(!file.skip_trailer);
        assert!(file.monitor);

        let cli = CliConfig::parse_from(["rated-extremes", "--skip-trailer", "--no-monitor"]);
        let config = cli.apply_to(file.clone());
        assert!(config.skip_trailer);
        assert!(!config.monitor);

        let untouched = CliConfig::parse_from(["rated-extremes"]).apply_to(file);
        assert!(!untouched.skip_trailer);
        assert!(untouched.monitor);
    }

    #[test]
    fn test_last_toggle_flag_wins() {
        let cli = CliConfig::parse_from([
            "rated-extremes",
            "--keep-trailer",
            "--skip-trailer",
            "--no-monitor",
            "--monitor",
        ]);
        let config = cli.apply_to(RunConfig::default());
        assert!(config.skip_trailer);
        assert!(config.monitor);
    }

    #[test]
    fn test_no_flags_gives_defaults() {
        let cli = CliConfig::parse_from(["rated-extremes"]);
        assert_eq!(cli.resolve().unwrap(), RunConfig::default());
    }

    #[test]
    fn test_parser_flag() {
        let cli = CliConfig::parse_from(["rated-extremes", "--parser", "csv"]);
        assert_eq!(cli.resolve().unwrap().parser, ParserMode::Csv);
    }
}
