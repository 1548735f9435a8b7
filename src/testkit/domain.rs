//! Builders for domain primitives used across tests.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::domain::{DividendEvent, PriceBar, RawDividendRow};

/// Build a date, panicking on an impossible one.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap_or_else(|| panic!("invalid test date {year}-{month}-{day}"))
}

/// Build a bar from open, high, low and close.
pub fn bar(open: Decimal, high: Decimal, low: Decimal, close: Decimal) -> PriceBar {
    PriceBar::new(open, high, low, close)
}

/// A bar that only matters for its close.
pub fn close_bar(close: Decimal) -> PriceBar {
    PriceBar::new(close, close, close, close)
}

/// A raw scraped dividend row.
pub fn row(date_text: &str, amount_text: &str) -> RawDividendRow {
    RawDividendRow::new(date_text, amount_text)
}

/// A valid dividend event.
pub fn event(ex_date: NaiveDate, amount: Decimal) -> DividendEvent {
    DividendEvent::try_new(ex_date, amount)
        .unwrap_or_else(|e| panic!("invalid test event: {e}"))
}
