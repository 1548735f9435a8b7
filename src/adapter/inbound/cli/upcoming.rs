//! Handlers for the `upcoming` and `tickers` commands.

use serde_json::json;

use super::command::ConfigPathArg;
use super::config::load_config;
use super::output;
use crate::adapter::outbound::report_file::{read_report_tickers, write_report};
use crate::error::{Error, Result};
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Config;
use crate::port::UpcomingExDateSource;

/// Fetch upcoming groups and rewrite the report file.
///
/// A fetch failure is fatal here: there is nothing else to fall back on.
pub async fn refresh_report(config: &Config, source: &dyn UpcomingExDateSource) -> Result<usize> {
    let groups = source.fetch_upcoming().await.map_err(|e| Error::Setup(e.to_string()))?;
    write_report(&config.report.path, &groups).await?;

    let rows: usize = groups.iter().map(|g| g.rows.len()).sum();
    if !output::is_json() {
        output::success(&format!(
            "Wrote {} listings across {} dates",
            output::highlight(rows),
            groups.len()
        ));
        output::field("Report", config.report.path.display());
    }
    Ok(rows)
}

/// Execute `upcoming`.
pub async fn execute_upcoming(args: &ConfigPathArg) -> Result<()> {
    let config = load_config(&args.config)?;
    config.init_logging();

    let dataset = bootstrap::open_dataset(&config)?;
    let listings = refresh_report(&config, &*dataset).await?;

    if output::is_json() {
        output::json_output(json!({
            "type": "upcoming",
            "payload": {
                "listings": listings,
                "report": config.report.path.display().to_string(),
            },
        }));
    }
    Ok(())
}

/// Execute `tickers`.
pub async fn execute_tickers(args: &ConfigPathArg) -> Result<()> {
    let config = load_config(&args.config)?;
    config.init_logging();

    let Some(tickers) = read_report_tickers(&config.report.path).await? else {
        return Err(Error::Setup(format!(
            "report file {} does not exist (run `divstrip upcoming` first)",
            config.report.path.display()
        )));
    };

    if output::is_json() {
        output::json_output(json!({
            "type": "tickers",
            "payload": { "tickers": tickers },
        }));
        return Ok(());
    }

    for ticker in &tickers {
        output::plain(ticker);
    }
    Ok(())
}
