//! Data source ports.
//!
//! The core never fetches or parses HTML itself. These traits hand it
//! pre-extracted rows and price bars; adapters decide where those come from
//! and own any retry or rate-limit policy.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::{ExDateGroup, PriceBar, RawDividendRow, Ticker};
use crate::error::SourceError;

/// Historical daily prices keyed by (ticker, date).
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Bars for every trading day in `[start, end]`.
    ///
    /// Returns [`SourceError::NotFound`] if the range has no data at all.
    async fn get_price_bars(
        &self,
        ticker: &Ticker,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<BTreeMap<NaiveDate, PriceBar>, SourceError>;

    /// Source name for logging.
    fn source_name(&self) -> &'static str;
}

/// A ticker's dividend history, most recent first.
#[async_trait]
pub trait DividendHistorySource: Send + Sync {
    async fn fetch_dividend_rows(&self, ticker: &Ticker)
        -> Result<Vec<RawDividendRow>, SourceError>;

    /// Source name for logging.
    fn source_name(&self) -> &'static str;
}

/// Upcoming ex-dividend listings grouped by date.
#[async_trait]
pub trait UpcomingExDateSource: Send + Sync {
    async fn fetch_upcoming(&self) -> Result<Vec<ExDateGroup>, SourceError>;
}
