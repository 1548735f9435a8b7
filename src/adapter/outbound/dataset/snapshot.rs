//! On-disk shape of a ticker snapshot.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::{PriceBar, RawDividendRow};

/// Dividend history rows and daily bars for one ticker.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TickerSnapshot {
    /// Raw rows, most recent first.
    #[serde(default)]
    pub dividends: Vec<RawDividendRow>,
    #[serde(default)]
    pub prices: BTreeMap<NaiveDate, PriceBar>,
}

impl TickerSnapshot {
    /// Bars dated within `[start, end]`.
    #[must_use]
    pub fn bars_between(&self, start: NaiveDate, end: NaiveDate) -> BTreeMap<NaiveDate, PriceBar> {
        if start > end {
            return BTreeMap::new();
        }
        self.prices
            .range(start..=end)
            .map(|(date, bar)| (*date, *bar))
            .collect()
    }
}
