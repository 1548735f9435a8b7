//! Dividend recovery scoring.
//!
//! An event counts as a success when buying at the close before the ex-date
//! and selling at the ex-date high, plus the payout, clears the margin:
//!
//! ```text
//! pre_close + margin < effective_post_price + dividend
//! ```
//!
//! When the ex-date bar has `open == high` the post price is treated as
//! unbounded, so flat-open days never count as failures. This is a heuristic
//! for one data source's no-detail days and may be miscalibrated for others.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{debug, trace, warn};

use crate::domain::calendar::previous_day;
use crate::domain::{
    Amount, DividendEvent, Outcome, PostPrice, PriceBar, RecoveryOutcome, SkipReason, Ticker,
    TickerTally,
};

/// Configuration for [`RecoveryEvaluator`].
#[derive(Debug, Clone, Deserialize)]
pub struct EvaluatorConfig {
    /// Minimum per-share profit, in dollars, for an event to count.
    #[serde(default = "default_margin")]
    pub margin: Amount,
}

fn default_margin() -> Decimal {
    Decimal::new(10, 2) // 0.10
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            margin: default_margin(),
        }
    }
}

/// The bar for the day before the ex-date and the ex-date bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarPair {
    pub pre: PriceBar,
    pub ex: PriceBar,
}

/// Scores dividend events against their price bars.
#[derive(Debug, Clone)]
pub struct RecoveryEvaluator {
    config: EvaluatorConfig,
}

impl RecoveryEvaluator {
    #[must_use]
    pub const fn new(config: EvaluatorConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// Ex-date price to compare against, `Unbounded` on flat-open days.
    #[must_use]
    pub fn effective_post_price(ex_bar: &PriceBar) -> PostPrice {
        if ex_bar.is_flat_open() {
            PostPrice::Unbounded
        } else {
            PostPrice::Bounded(ex_bar.high)
        }
    }

    /// Pick the bars for `previous_day(ex_date)` and `ex_date`.
    #[must_use]
    pub fn bars_for(
        event: &DividendEvent,
        bars_by_date: &BTreeMap<NaiveDate, PriceBar>,
    ) -> Option<BarPair> {
        let ex_date = event.ex_date();
        let pre = bars_by_date.get(&previous_day(ex_date))?;
        let ex = bars_by_date.get(&ex_date)?;
        Some(BarPair { pre: *pre, ex: *ex })
    }

    /// Score one event. Missing bars give a skip, never an error.
    #[must_use]
    pub fn evaluate(&self, event: DividendEvent, bars: Option<BarPair>) -> RecoveryOutcome {
        let Some(BarPair { pre, ex }) = bars else {
            return RecoveryOutcome::new(event, Outcome::Skipped(SkipReason::MissingPriceData));
        };

        let pre_close = pre.close;
        let post_price = Self::effective_post_price(&ex);
        let exceeds = pre_close
            .checked_add(self.config.margin)
            .and_then(|threshold| post_price.plus_exceeds(event.amount(), threshold));

        let outcome = match exceeds {
            Some(true) => Outcome::Success,
            Some(false) => Outcome::Failure,
            None => {
                warn!(ex_date = %event.ex_date(), "price arithmetic overflowed, skipping event");
                Outcome::Skipped(SkipReason::PriceOverflow)
            }
        };

        debug!(
            ex_date = %event.ex_date(),
            dividend = %event.amount(),
            pre_close = %pre_close,
            post_price = %post_price,
            ex_close = %ex.close,
            ?outcome,
            "scored dividend event"
        );

        RecoveryOutcome::new(event, outcome)
    }

    /// Score a ticker's whole history and fold it into a tally.
    pub fn evaluate_all<I>(&self, ticker: Ticker, events: I) -> (TickerTally, Vec<RecoveryOutcome>)
    where
        I: IntoIterator<Item = (DividendEvent, Option<BarPair>)>,
    {
        let mut tally = TickerTally::new(ticker);
        let outcomes: Vec<RecoveryOutcome> = events
            .into_iter()
            .map(|(event, bars)| self.evaluate(event, bars))
            .inspect(|scored| tally.record(&scored.outcome))
            .collect();

        trace!(
            ticker = %tally.ticker,
            successes = tally.successes,
            failures = tally.failures,
            skipped = tally.skipped,
            "folded ticker outcomes"
        );

        (tally, outcomes)
    }
}

impl Default for RecoveryEvaluator {
    fn default() -> Self {
        Self::new(EvaluatorConfig::default())
    }
}
