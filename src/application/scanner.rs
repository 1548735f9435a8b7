//! Per-ticker and per-batch dividend recovery scans.
//!
//! A scan walks tickers strictly in sequence. For each ticker it fetches the
//! dividend history, parses it, fetches the two price bars around every
//! ex-date and scores the event. Failures stay inside their ticker: a
//! history fetch error skips the ticker, a price fetch error skips the event.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::evaluator::{BarPair, RecoveryEvaluator};
use super::parser::{DividendEventParser, RejectedRow};
use crate::domain::calendar::previous_day;
use crate::domain::{DividendEvent, RecoveryOutcome, Ticker, TickerTally};
use crate::port::{DividendHistorySource, PriceSource};

/// Pacing for outbound price requests.
#[derive(Debug, Clone, Deserialize)]
pub struct ScanConfig {
    /// Delay between consecutive price requests, in milliseconds.
    #[serde(default = "default_request_delay_ms")]
    pub request_delay_ms: u64,
}

fn default_request_delay_ms() -> u64 {
    100
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            request_delay_ms: default_request_delay_ms(),
        }
    }
}

impl ScanConfig {
    #[must_use]
    pub const fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }
}

/// Whether a ticker was evaluated at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum TickerStatus {
    Evaluated,
    Skipped(String),
}

/// Everything a scan learned about one ticker.
#[derive(Debug, Clone)]
pub struct TickerReport {
    pub ticker: Ticker,
    pub status: TickerStatus,
    pub tally: TickerTally,
    pub outcomes: Vec<RecoveryOutcome>,
    pub rejected_rows: Vec<RejectedRow>,
    pub halted_at_year: Option<i32>,
}

impl TickerReport {
    fn skipped(ticker: Ticker, reason: String) -> Self {
        Self {
            tally: TickerTally::new(ticker.clone()),
            ticker,
            status: TickerStatus::Skipped(reason),
            outcomes: Vec::new(),
            rejected_rows: Vec::new(),
            halted_at_year: None,
        }
    }

    #[must_use]
    pub fn is_skipped(&self) -> bool {
        matches!(self.status, TickerStatus::Skipped(_))
    }
}

/// Reports for a whole batch, in scan order.
#[derive(Debug, Clone, Default)]
pub struct BatchSummary {
    pub reports: Vec<TickerReport>,
}

impl BatchSummary {
    #[must_use]
    pub fn successes(&self) -> u32 {
        self.reports.iter().map(|r| r.tally.successes).sum()
    }

    #[must_use]
    pub fn failures(&self) -> u32 {
        self.reports.iter().map(|r| r.tally.failures).sum()
    }

    /// Events skipped across evaluated tickers.
    #[must_use]
    pub fn skipped_events(&self) -> u32 {
        self.reports.iter().map(|r| r.tally.skipped).sum()
    }

    #[must_use]
    pub fn skipped_tickers(&self) -> usize {
        self.reports.iter().filter(|r| r.is_skipped()).count()
    }

    #[must_use]
    pub fn rejected_rows(&self) -> usize {
        self.reports.iter().map(|r| r.rejected_rows.len()).sum()
    }
}

/// Sequential scanner over a list of tickers.
pub struct TickerScanner {
    dividends: Arc<dyn DividendHistorySource>,
    prices: Arc<dyn PriceSource>,
    parser: DividendEventParser,
    evaluator: RecoveryEvaluator,
    request_delay: Duration,
    /// Set once the first price request of this scanner has gone out.
    priced: AtomicBool,
}

impl TickerScanner {
    pub fn new(
        dividends: Arc<dyn DividendHistorySource>,
        prices: Arc<dyn PriceSource>,
        parser: DividendEventParser,
        evaluator: RecoveryEvaluator,
        config: &ScanConfig,
    ) -> Self {
        Self {
            dividends,
            prices,
            parser,
            evaluator,
            request_delay: config.request_delay(),
            priced: AtomicBool::new(false),
        }
    }

    /// Scan every ticker in order. Never fails; skips are in the summary.
    pub async fn scan_batch(&self, tickers: &[Ticker]) -> BatchSummary {
        let mut summary = BatchSummary::default();
        for ticker in tickers {
            summary.reports.push(self.scan_ticker(ticker).await);
        }

        info!(
            tickers = summary.reports.len(),
            skipped_tickers = summary.skipped_tickers(),
            successes = summary.successes(),
            failures = summary.failures(),
            skipped_events = summary.skipped_events(),
            "scan complete"
        );
        summary
    }

    /// Scan one ticker's full dividend history.
    pub async fn scan_ticker(&self, ticker: &Ticker) -> TickerReport {
        let rows = match self.dividends.fetch_dividend_rows(ticker).await {
            Ok(rows) => rows,
            Err(e) => {
                warn!(
                    ticker = %ticker,
                    source = self.dividends.source_name(),
                    error = %e,
                    "skipping ticker: dividend history unavailable"
                );
                return TickerReport::skipped(ticker.clone(), e.to_string());
            }
        };

        let parsed = self.parser.parse(&rows);
        for rejected in &parsed.rejected {
            warn!(
                ticker = %ticker,
                row = rejected.index,
                error = %rejected.error,
                "skipping dividend row"
            );
        }

        let mut scored = Vec::with_capacity(parsed.events.len());
        for event in &parsed.events {
            self.pace().await;
            scored.push((*event, self.fetch_bars(ticker, event).await));
        }

        let (tally, outcomes) = self.evaluator.evaluate_all(ticker.clone(), scored);
        info!(
            ticker = %ticker,
            events = outcomes.len(),
            successes = tally.successes,
            failures = tally.failures,
            skipped = tally.skipped,
            "ticker evaluated"
        );

        TickerReport {
            ticker: ticker.clone(),
            status: TickerStatus::Evaluated,
            tally,
            outcomes,
            rejected_rows: parsed.rejected,
            halted_at_year: parsed.halted_at_year,
        }
    }

    /// Wait between price requests, across tickers as well as within one.
    async fn pace(&self) {
        let follows_earlier = self.priced.swap(true, Ordering::Relaxed);
        if follows_earlier && !self.request_delay.is_zero() {
            tokio::time::sleep(self.request_delay).await;
        }
    }

    async fn fetch_bars(&self, ticker: &Ticker, event: &DividendEvent) -> Option<BarPair> {
        let ex_date = event.ex_date();
        let start = previous_day(ex_date);

        match self.prices.get_price_bars(ticker, start, ex_date).await {
            Ok(bars) => {
                let pair = RecoveryEvaluator::bars_for(event, &bars);
                if pair.is_none() {
                    debug!(
                        ticker = %ticker,
                        %start,
                        %ex_date,
                        bars = bars.len(),
                        "price range missing a bar"
                    );
                }
                pair
            }
            Err(e) => {
                debug!(
                    ticker = %ticker,
                    source = self.prices.source_name(),
                    %ex_date,
                    error = %e,
                    "price fetch failed"
                );
                None
            }
        }
    }
}

/// Seed tickers followed by extra tickers, first occurrence wins.
#[must_use]
pub fn collect_tickers<I, J>(seed: I, extra: J) -> Vec<Ticker>
where
    I: IntoIterator<Item = Ticker>,
    J: IntoIterator<Item = Ticker>,
{
    let mut seen = HashSet::new();
    seed.into_iter()
        .chain(extra)
        .filter(|t| !t.is_empty())
        .filter(|t| seen.insert(t.clone()))
        .collect()
}
