//! File-backed data sources.
//!
//! A dataset directory holds one JSON snapshot per ticker plus an optional
//! listing of upcoming ex-dividend dates:
//!
//! ```text
//! data/
//! ├── KO.json          {"dividends": [...], "prices": {"2023-01-04": {...}}}
//! ├── XOM.json
//! └── upcoming.json    [{"label": "Monday, Jan 8", "rows": [[...6 fields...]]}]
//! ```
//!
//! Snapshots are pre-extracted from the upstream site, so rows are kept as
//! raw text and go through the same parser as live data would.

mod snapshot;

pub use snapshot::TickerSnapshot;

use std::collections::{BTreeMap, HashMap};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;
use tracing::{debug, trace};

use crate::domain::{ExDateGroup, PriceBar, RawDividendRow, Ticker};
use crate::error::{Error, SourceError};
use crate::port::{DividendHistorySource, PriceSource, UpcomingExDateSource};

const UPCOMING_FILE: &str = "upcoming.json";

/// Dividend history, prices and upcoming listings read from a directory.
///
/// Ticker snapshots are loaded once and cached for the life of the source.
pub struct DatasetSource {
    root: PathBuf,
    cache: RwLock<HashMap<Ticker, Arc<TickerSnapshot>>>,
}

impl DatasetSource {
    /// Open a dataset directory. Fails if it does not exist.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, Error> {
        let root = root.into();
        if !root.is_dir() {
            return Err(Error::Setup(format!(
                "dataset directory {} does not exist",
                root.display()
            )));
        }
        Ok(Self {
            root,
            cache: RwLock::new(HashMap::new()),
        })
    }

    /// Snapshot path for `ticker`. Symbols that could leave the dataset
    /// root are rejected.
    fn ticker_path(&self, ticker: &Ticker) -> Result<PathBuf, SourceError> {
        let symbol = ticker.as_str();
        if symbol.is_empty()
            || symbol.contains("..")
            || symbol.contains(['/', '\\'])
            || Path::new(symbol).is_absolute()
        {
            return Err(SourceError::fetch(ticker, "invalid ticker symbol"));
        }
        Ok(self.root.join(format!("{symbol}.json")))
    }

    async fn snapshot(&self, ticker: &Ticker) -> Result<Arc<TickerSnapshot>, SourceError> {
        if let Some(cached) = self.cache.read().await.get(ticker) {
            trace!(ticker = %ticker, "dataset cache hit");
            return Ok(Arc::clone(cached));
        }

        let path = self.ticker_path(ticker)?;
        let snapshot: TickerSnapshot = read_json(&path, ticker).await?;
        let snapshot = Arc::new(snapshot);
        debug!(
            ticker = %ticker,
            path = %path.display(),
            dividends = snapshot.dividends.len(),
            bars = snapshot.prices.len(),
            "loaded ticker snapshot"
        );

        self.cache
            .write()
            .await
            .insert(ticker.clone(), Arc::clone(&snapshot));
        Ok(snapshot)
    }
}

async fn read_json<T>(path: &Path, subject: impl std::fmt::Display) -> Result<T, SourceError>
where
    T: serde::de::DeserializeOwned,
{
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(SourceError::not_found(
                subject,
                format!("{} does not exist", path.display()),
            ));
        }
        Err(e) => {
            return Err(SourceError::fetch(
                subject,
                format!("failed to read {}: {e}", path.display()),
            ));
        }
    };

    serde_json::from_str(&content).map_err(|e| {
        SourceError::fetch(subject, format!("invalid JSON in {}: {e}", path.display()))
    })
}

#[async_trait]
impl DividendHistorySource for DatasetSource {
    async fn fetch_dividend_rows(
        &self,
        ticker: &Ticker,
    ) -> Result<Vec<RawDividendRow>, SourceError> {
        Ok(self.snapshot(ticker).await?.dividends.clone())
    }

    fn source_name(&self) -> &'static str {
        "dataset"
    }
}

#[async_trait]
impl PriceSource for DatasetSource {
    async fn get_price_bars(
        &self,
        ticker: &Ticker,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<BTreeMap<NaiveDate, PriceBar>, SourceError> {
        let snapshot = self.snapshot(ticker).await?;
        let bars = snapshot.bars_between(start, end);
        if bars.is_empty() {
            return Err(SourceError::not_found(
                ticker,
                format!("no price bars between {start} and {end}"),
            ));
        }
        Ok(bars)
    }

    fn source_name(&self) -> &'static str {
        "dataset"
    }
}

#[async_trait]
impl UpcomingExDateSource for DatasetSource {
    async fn fetch_upcoming(&self) -> Result<Vec<ExDateGroup>, SourceError> {
        read_json(&self.root.join(UPCOMING_FILE), "upcoming ex-dividend dates").await
    }
}
