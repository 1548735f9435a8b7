//! In-memory data sources.
//!
//! Each source serves canned data and can be told to fail for a ticker.
//! Price requests are counted so tests can assert on call patterns.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::{ExDateGroup, PriceBar, RawDividendRow, Ticker};
use crate::error::SourceError;
use crate::port::{DividendHistorySource, PriceSource, UpcomingExDateSource};

/// Dividend history served from memory.
#[derive(Debug, Default)]
pub struct StaticDividendSource {
    rows: HashMap<Ticker, Vec<RawDividendRow>>,
    failing: HashSet<Ticker>,
}

impl StaticDividendSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `rows` for `ticker`.
    pub fn with_rows(mut self, ticker: &str, rows: Vec<RawDividendRow>) -> Self {
        self.rows.insert(Ticker::new(ticker), rows);
        self
    }

    /// Fail every request for `ticker`.
    pub fn failing(mut self, ticker: &str) -> Self {
        self.failing.insert(Ticker::new(ticker));
        self
    }
}

#[async_trait]
impl DividendHistorySource for StaticDividendSource {
    async fn fetch_dividend_rows(
        &self,
        ticker: &Ticker,
    ) -> Result<Vec<RawDividendRow>, SourceError> {
        if self.failing.contains(ticker) {
            return Err(SourceError::fetch(ticker, "connection reset"));
        }
        self.rows
            .get(ticker)
            .cloned()
            .ok_or_else(|| SourceError::not_found(ticker, "no dividend history"))
    }

    fn source_name(&self) -> &'static str {
        "static"
    }
}

/// Daily bars served from memory.
#[derive(Debug, Default)]
pub struct StaticPriceSource {
    bars: HashMap<Ticker, BTreeMap<NaiveDate, PriceBar>>,
    failing: HashSet<Ticker>,
    requests: AtomicUsize,
}

impl StaticPriceSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `bar` for `ticker` on `date`.
    pub fn with_bar(mut self, ticker: &str, date: NaiveDate, bar: PriceBar) -> Self {
        self.bars
            .entry(Ticker::new(ticker))
            .or_default()
            .insert(date, bar);
        self
    }

    /// Fail every request for `ticker`.
    pub fn failing(mut self, ticker: &str) -> Self {
        self.failing.insert(Ticker::new(ticker));
        self
    }

    /// Number of `get_price_bars` calls so far.
    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PriceSource for StaticPriceSource {
    async fn get_price_bars(
        &self,
        ticker: &Ticker,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<BTreeMap<NaiveDate, PriceBar>, SourceError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        if self.failing.contains(ticker) {
            return Err(SourceError::fetch(ticker, "rate limited"));
        }

        let bars: BTreeMap<NaiveDate, PriceBar> = self
            .bars
            .get(ticker)
            .map(|bars| {
                bars.range(start..=end)
                    .map(|(date, bar)| (*date, *bar))
                    .collect()
            })
            .unwrap_or_default();

        if bars.is_empty() {
            return Err(SourceError::not_found(
                ticker,
                format!("no bars between {start} and {end}"),
            ));
        }
        Ok(bars)
    }

    fn source_name(&self) -> &'static str {
        "static"
    }
}

/// Upcoming listings served from memory, or a fetch failure.
#[derive(Debug, Default)]
pub struct StaticUpcomingSource {
    groups: Option<Vec<ExDateGroup>>,
}

impl StaticUpcomingSource {
    pub fn new(groups: Vec<ExDateGroup>) -> Self {
        Self {
            groups: Some(groups),
        }
    }

    /// A source whose every fetch fails.
    pub fn unavailable() -> Self {
        Self { groups: None }
    }
}

#[async_trait]
impl UpcomingExDateSource for StaticUpcomingSource {
    async fn fetch_upcoming(&self) -> Result<Vec<ExDateGroup>, SourceError> {
        self.groups
            .clone()
            .ok_or_else(|| SourceError::fetch("upcoming ex-dividend dates", "site unreachable"))
    }
}
