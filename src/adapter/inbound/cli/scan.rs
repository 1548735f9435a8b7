//! Handler for the `scan` command.

use serde_json::json;
use tabled::{Table, Tabled};
use tracing::warn;

use super::command::ScanArgs;
use super::config::load_config;
use super::output;
use super::upcoming::refresh_report;
use crate::adapter::outbound::report_file::read_report_tickers;
use crate::application::{collect_tickers, BatchSummary, TickerReport, TickerStatus};
use crate::domain::{Outcome, Ticker};
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Config;

#[derive(Tabled)]
struct TallyRow {
    #[tabled(rename = "Ticker")]
    ticker: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Successes")]
    successes: u32,
    #[tabled(rename = "Failures")]
    failures: u32,
    #[tabled(rename = "Skipped")]
    skipped: u32,
    #[tabled(rename = "Rate")]
    rate: String,
}

impl From<&TickerReport> for TallyRow {
    fn from(report: &TickerReport) -> Self {
        let status = match &report.status {
            TickerStatus::Evaluated => "evaluated".to_string(),
            TickerStatus::Skipped(_) => "skipped".to_string(),
        };
        Self {
            ticker: report.ticker.to_string(),
            status,
            successes: report.tally.successes,
            failures: report.tally.failures,
            skipped: report.tally.skipped,
            rate: report
                .tally
                .success_rate()
                .map_or_else(|| "-".to_string(), |r| format!("{r:.1}%")),
        }
    }
}

/// Execute `scan`.
pub async fn execute(args: &ScanArgs) -> Result<()> {
    let mut config = load_config(&args.config)?;
    apply_overrides(&mut config, args);
    config.validate()?;
    config.init_logging();

    let dataset = bootstrap::open_dataset(&config)?;

    if args.refresh {
        refresh_report(&config, &*dataset).await?;
    }

    let report_tickers = if args.no_report {
        Vec::new()
    } else {
        match read_report_tickers(&config.report.path).await? {
            Some(tickers) => tickers,
            None => {
                warn!(path = %config.report.path.display(), "report file not found");
                Vec::new()
            }
        }
    };

    let seed = config
        .tickers
        .iter()
        .cloned()
        .chain(args.tickers.iter().map(Ticker::new));
    let tickers = collect_tickers(seed, report_tickers);

    // An empty batch still yields an empty scan document in JSON mode.
    if tickers.is_empty() && !output::is_json() {
        output::warning("No tickers to scan");
        output::hint("add tickers to config, pass them as arguments, or run with --refresh");
        return Ok(());
    }

    let scanner = bootstrap::build_scanner(&config, dataset);
    let summary = scanner.scan_batch(&tickers).await;

    if output::is_json() {
        output::json_output(summary_json(&summary));
    } else {
        render(&summary);
    }
    Ok(())
}

fn apply_overrides(config: &mut Config, args: &ScanArgs) {
    if let Some(dir) = &args.dataset {
        config.dataset.dir.clone_from(dir);
    }
    if let Some(margin) = args.margin {
        config.evaluator.margin = margin;
    }
    if let Some(years) = args.lookback_years {
        config.parser.lookback_years = years;
    }
    if let Some(year) = args.current_year {
        config.parser.current_year = year;
    }
    if let Some(delay) = args.request_delay_ms {
        config.scan.request_delay_ms = delay;
    }
}

fn render(summary: &BatchSummary) {
    if output::is_quiet() {
        for report in &summary.reports {
            output::plain(format_args!(
                "{} {} {} {}",
                report.ticker, report.tally.successes, report.tally.failures, report.tally.skipped
            ));
        }
        return;
    }

    output::section("Dividend Recovery");
    let rows: Vec<TallyRow> = summary.reports.iter().map(TallyRow::from).collect();
    output::lines(&Table::new(rows).to_string());

    for report in &summary.reports {
        if let TickerStatus::Skipped(reason) = &report.status {
            output::warning(&format!("{} skipped: {reason}", report.ticker));
        }
        if !report.rejected_rows.is_empty() {
            output::warning(&format!(
                "{}: {} dividend rows could not be parsed",
                report.ticker,
                report.rejected_rows.len()
            ));
        }
    }

    if output::verbosity() > 0 {
        for report in summary.reports.iter().filter(|r| !r.outcomes.is_empty()) {
            output::section(&format!("{} events", report.ticker));
            for scored in &report.outcomes {
                let label = match scored.outcome {
                    Outcome::Success => output::positive("success"),
                    Outcome::Failure => output::negative("failure"),
                    Outcome::Skipped(reason) => output::muted(format!("skipped ({reason})")),
                };
                output::field(
                    &scored.event.ex_date().to_string(),
                    format!("${} {label}", scored.event.amount()),
                );
            }
        }
    }

    output::section("Totals");
    output::field("Tickers", summary.reports.len());
    output::field("Successes", output::positive(summary.successes()));
    output::field("Failures", output::negative(summary.failures()));
    output::field("Skipped", summary.skipped_events());
    if summary.skipped_tickers() > 0 {
        output::field("Skipped tickers", summary.skipped_tickers());
    }
}

fn summary_json(summary: &BatchSummary) -> serde_json::Value {
    let tickers: Vec<serde_json::Value> = summary
        .reports
        .iter()
        .map(|report| {
            json!({
                "ticker": report.ticker,
                "status": report.status,
                "tally": report.tally,
                "outcomes": report.outcomes,
                "rejected_rows": report
                    .rejected_rows
                    .iter()
                    .map(|r| json!({ "index": r.index, "error": r.error.to_string() }))
                    .collect::<Vec<_>>(),
                "halted_at_year": report.halted_at_year,
            })
        })
        .collect();

    json!({
        "type": "scan",
        "payload": {
            "tickers": tickers,
            "totals": {
                "successes": summary.successes(),
                "failures": summary.failures(),
                "skipped_events": summary.skipped_events(),
                "skipped_tickers": summary.skipped_tickers(),
                "rejected_rows": summary.rejected_rows(),
            },
        },
    })
}
