//! Daily price bars supplied by the price-history source.

use serde::{Deserialize, Serialize};

use super::money::Price;

/// Open/high/low/close summary of one trading day.
///
/// Bars are read-only facts from the external source; nothing here
/// validates that `low <= open, close <= high`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBar {
    pub open: Price,
    pub high: Price,
    pub low: Price,
    pub close: Price,
}

impl PriceBar {
    #[must_use]
    pub const fn new(open: Price, high: Price, low: Price, close: Price) -> Self {
        Self {
            open,
            high,
            low,
            close,
        }
    }

    /// True when the day recorded no move above the open.
    #[must_use]
    pub fn is_flat_open(&self) -> bool {
        self.open == self.high
    }
}
