//! Handler for the `config` command group and shared config loading.

use std::fs;
use std::path::Path;

use serde_json::json;
use tracing::debug;

use super::output;
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::settings::Config;

/// Default config template with documentation.
const CONFIG_TEMPLATE: &str = include_str!("../../../../config.toml.example");

/// Path used when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Load the config at `path`.
///
/// A missing file at the default path means built-in defaults; any other
/// missing or invalid file is an error.
pub fn load_config(path: &Path) -> Result<Config> {
    if path == Path::new(DEFAULT_CONFIG_PATH) && !path.exists() {
        debug!("no config.toml found, using defaults");
        let mut config = Config::default();
        config.apply_env_overrides();
        config.validate()?;
        return Ok(config);
    }
    Config::load(path)
}

/// Execute `config init`.
pub fn execute_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::InvalidValue {
            field: "config",
            reason: "file already exists (use --force to overwrite)".to_string(),
        }
        .into());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, CONFIG_TEMPLATE)?;
    output::section("Config Initialized");
    output::success("Created configuration file");
    output::field("Path", path.display());
    output::section("Next Steps");
    output::note(&format!("1. Edit {} with your tickers and dataset", path.display()));
    output::note(&format!(
        "2. Run: divstrip config validate -c {}",
        path.display()
    ));
    output::note(&format!("3. Run: divstrip scan -c {}", path.display()));
    Ok(())
}

/// Execute `config show`.
pub fn execute_show(path: &Path) -> Result<()> {
    let config = load_config(path)?;

    if output::is_json() {
        output::json_output(json!({
            "type": "config",
            "payload": {
                "tickers": config.tickers,
                "dataset_dir": config.dataset.dir.display().to_string(),
                "report_path": config.report.path.display().to_string(),
                "current_year": config.parser.current_year,
                "lookback_years": config.parser.lookback_years,
                "margin": config.evaluator.margin,
                "request_delay_ms": config.scan.request_delay_ms,
                "log_level": config.logging.level,
                "log_format": config.logging.format,
            },
        }));
        return Ok(());
    }

    output::section("Effective Configuration");
    if config.tickers.is_empty() {
        output::field("Tickers", "(none)");
    } else {
        let tickers: Vec<&str> = config.tickers.iter().map(|t| t.as_str()).collect();
        output::field("Tickers", tickers.join(", "));
    }

    output::section("Data");
    output::field("Dataset", config.dataset.dir.display());
    output::field("Report", config.report.path.display());
    output::field(
        "Request delay",
        format!("{}ms", config.scan.request_delay_ms),
    );

    output::section("Evaluation");
    output::field("Current year", config.parser.current_year);
    output::field("Lookback", format!("{} years", config.parser.lookback_years));
    output::field("Margin", format!("${}", config.evaluator.margin));

    output::section("Logging");
    output::field("Level", &config.logging.level);
    output::field("Format", &config.logging.format);
    Ok(())
}

/// Execute `config validate`.
pub fn execute_validate(path: &Path) -> Result<()> {
    Config::load(path)?;
    output::success(&format!("{} is valid", path.display()));
    Ok(())
}
