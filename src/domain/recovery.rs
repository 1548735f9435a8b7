//! Per-event recovery outcomes and the per-ticker tally.
//!
//! - [`PostPrice`] - The ex-date price the recovery test compares against
//! - [`Outcome`] - Success, failure, or an auditable skip
//! - [`RecoveryOutcome`] - An outcome bound to the event it scored
//! - [`TickerTally`] - Running counts for one ticker

use std::fmt;

use serde::Serialize;

use super::dividend::DividendEvent;
use super::id::Ticker;
use super::money::Price;

/// Ex-date price used on the right-hand side of the recovery test.
///
/// `Unbounded` stands for `+infinity`: it compares greater than every
/// bounded price, whatever gets added to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "price", rename_all = "snake_case")]
pub enum PostPrice {
    Bounded(Price),
    Unbounded,
}

impl PostPrice {
    /// `self + addend > threshold`, or `None` if the sum overflows.
    #[must_use]
    pub fn plus_exceeds(&self, addend: Price, threshold: Price) -> Option<bool> {
        match self {
            Self::Bounded(price) => price.checked_add(addend).map(|sum| threshold < sum),
            Self::Unbounded => Some(true),
        }
    }
}

impl fmt::Display for PostPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bounded(price) => write!(f, "{price}"),
            Self::Unbounded => write!(f, "+inf"),
        }
    }
}

/// Why an event was not scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkipReason {
    /// The price source had no bar for the day before or for the ex-date,
    /// or the request failed.
    MissingPriceData,
    /// Price arithmetic overflowed; the bars are not plausible prices.
    PriceOverflow,
}

impl SkipReason {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MissingPriceData => "missing-price-data",
            Self::PriceOverflow => "price-overflow",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of scoring one dividend event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "result", content = "reason", rename_all = "snake_case")]
pub enum Outcome {
    Success,
    Failure,
    Skipped(SkipReason),
}

/// An [`Outcome`] together with the event it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecoveryOutcome {
    pub event: DividendEvent,
    pub outcome: Outcome,
}

impl RecoveryOutcome {
    #[must_use]
    pub const fn new(event: DividendEvent, outcome: Outcome) -> Self {
        Self { event, outcome }
    }
}

/// Success, failure and skip counts for one ticker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TickerTally {
    pub ticker: Ticker,
    pub successes: u32,
    pub failures: u32,
    pub skipped: u32,
}

impl TickerTally {
    /// Creates an empty tally.
    #[must_use]
    pub fn new(ticker: Ticker) -> Self {
        Self {
            ticker,
            successes: 0,
            failures: 0,
            skipped: 0,
        }
    }

    /// Counts one outcome.
    pub fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Success => self.successes += 1,
            Outcome::Failure => self.failures += 1,
            Outcome::Skipped(_) => self.skipped += 1,
        }
    }

    /// Number of events that were actually scored.
    #[must_use]
    pub fn scored(&self) -> u32 {
        self.successes + self.failures
    }

    /// Success rate over scored events as a percentage.
    #[must_use]
    pub fn success_rate(&self) -> Option<f64> {
        let scored = self.scored();
        if scored == 0 {
            None
        } else {
            Some(f64::from(self.successes) / f64::from(scored) * 100.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn unbounded_always_exceeds() {
        assert_eq!(
            PostPrice::Unbounded.plus_exceeds(dec!(0), dec!(1_000_000)),
            Some(true)
        );
    }

    #[test]
    fn bounded_comparison_is_strict() {
        let post = PostPrice::Bounded(dec!(50.00));
        assert_eq!(post.plus_exceeds(dec!(0.10), dec!(50.10)), Some(false));
        assert_eq!(post.plus_exceeds(dec!(0.11), dec!(50.10)), Some(true));
    }

    #[test]
    fn bounded_overflow_is_none() {
        let post = PostPrice::Bounded(Decimal::MAX);
        assert_eq!(post.plus_exceeds(dec!(1), dec!(50.10)), None);
    }

    #[test]
    fn tally_counts_each_kind() {
        let mut tally = TickerTally::new(Ticker::new("KO"));
        tally.record(&Outcome::Success);
        tally.record(&Outcome::Success);
        tally.record(&Outcome::Failure);
        tally.record(&Outcome::Skipped(SkipReason::MissingPriceData));

        assert_eq!(tally.successes, 2);
        assert_eq!(tally.failures, 1);
        assert_eq!(tally.skipped, 1);
        assert_eq!(tally.scored(), 3);
    }

    #[test]
    fn success_rate_ignores_skips() {
        let mut tally = TickerTally::new(Ticker::new("KO"));
        assert_eq!(tally.success_rate(), None);

        tally.record(&Outcome::Success);
        tally.record(&Outcome::Failure);
        tally.record(&Outcome::Skipped(SkipReason::MissingPriceData));
        assert_eq!(tally.success_rate(), Some(50.0));
    }

    #[test]
    fn skip_reason_renders_kebab_case() {
        assert_eq!(SkipReason::MissingPriceData.to_string(), "missing-price-data");
    }
}
