//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file; `DIVSTRIP_DATASET_DIR` overrides
//! the dataset directory.
//!
//! # Example
//!
//! ```no_run
//! use divstrip::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use rust_decimal::Decimal;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use super::logging::LoggingConfig;
use crate::application::{EvaluatorConfig, ParserConfig, ScanConfig};
use crate::domain::Ticker;
use crate::error::{ConfigError, Result};

/// Environment variable that overrides `[dataset] dir`.
pub const DATASET_DIR_ENV: &str = "DIVSTRIP_DATASET_DIR";

/// Where pre-extracted dividend and price snapshots live.
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetConfig {
    #[serde(default = "default_dataset_dir")]
    pub dir: PathBuf,
}

fn default_dataset_dir() -> PathBuf {
    PathBuf::from("data")
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            dir: default_dataset_dir(),
        }
    }
}

/// Location of the upcoming ex-dividend report file.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_report_path")]
    pub path: PathBuf,
}

fn default_report_path() -> PathBuf {
    PathBuf::from("upcoming_ex_dates.txt")
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            path: default_report_path(),
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Tickers always scanned, ahead of those read from the report.
    #[serde(default)]
    pub tickers: Vec<Ticker>,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub parser: ParserConfig,
    #[serde(default)]
    pub evaluator: EvaluatorConfig,
    #[serde(default)]
    pub scan: ScanConfig,
}

impl Config {
    /// Load, apply environment overrides, and validate.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let mut config = Self::parse(&content)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Apply `DIVSTRIP_DATASET_DIR` if set and non-empty.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(dir) = std::env::var(DATASET_DIR_ENV) {
            if !dir.trim().is_empty() {
                self.dataset.dir = PathBuf::from(dir);
            }
        }
    }

    /// Parse TOML without environment overrides or validation.
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content).map_err(ConfigError::Parse)?)
    }

    /// Check cross-field invariants.
    pub fn validate(&self) -> Result<()> {
        if self.dataset.dir.as_os_str().is_empty() {
            return Err(ConfigError::MissingField { field: "dataset.dir" }.into());
        }
        if self.report.path.as_os_str().is_empty() {
            return Err(ConfigError::MissingField { field: "report.path" }.into());
        }
        if self.evaluator.margin < Decimal::ZERO {
            return Err(ConfigError::InvalidValue {
                field: "margin",
                reason: format!("must be non-negative, got {}", self.evaluator.margin),
            }
            .into());
        }
        if self.parser.lookback_years < 0 {
            return Err(ConfigError::InvalidValue {
                field: "lookback_years",
                reason: format!("must be non-negative, got {}", self.parser.lookback_years),
            }
            .into());
        }
        if !self.logging.is_known_format() {
            return Err(ConfigError::InvalidValue {
                field: "format",
                reason: format!("expected 'pretty' or 'json', got '{}'", self.logging.format),
            }
            .into());
        }
        Ok(())
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use rust_decimal_macros::dec;

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::parse("").unwrap();

        assert!(config.tickers.is_empty());
        assert_eq!(config.evaluator.margin, dec!(0.10));
        assert_eq!(config.parser.lookback_years, 5);
        assert_eq!(config.scan.request_delay_ms, 100);
        assert_eq!(config.dataset.dir, PathBuf::from("data"));
        assert_eq!(config.report.path, PathBuf::from("upcoming_ex_dates.txt"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn sections_override_defaults() {
        let config = Config::parse(
            r#"
tickers = ["arii", "XOM"]

[parser]
current_year = 2017
lookback_years = 3

[evaluator]
margin = 0.25

[scan]
request_delay_ms = 0
"#,
        )
        .unwrap();

        assert_eq!(config.tickers, vec![Ticker::new("ARII"), Ticker::new("XOM")]);
        assert_eq!(config.parser.current_year, 2017);
        assert_eq!(config.parser.earliest_year(), 2014);
        assert_eq!(config.evaluator.margin, dec!(0.25));
        assert_eq!(config.scan.request_delay_ms, 0);
    }

    #[test]
    fn negative_margin_is_rejected() {
        let config = Config::parse("[evaluator]\nmargin = -0.01\n").unwrap();
        assert!(matches!(
            config.validate(),
            Err(Error::Config(ConfigError::InvalidValue { field: "margin", .. }))
        ));
    }

    #[test]
    fn unknown_log_format_is_rejected() {
        let config = Config::parse("[logging]\nformat = \"xml\"\n").unwrap();
        assert!(matches!(
            config.validate(),
            Err(Error::Config(ConfigError::InvalidValue { field: "format", .. }))
        ));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        assert!(matches!(
            Config::parse("tickers = ["),
            Err(Error::Config(ConfigError::Parse(_)))
        ));
    }
}
