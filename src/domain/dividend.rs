//! Dividend events and the raw rows they are parsed from.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::money::Amount;

/// One row of a ticker's dividend history, exactly as scraped.
///
/// `date_text` looks like `"Jan 5, 2023"`, `amount_text` like `"$0.42"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDividendRow {
    #[serde(rename = "date")]
    pub date_text: String,
    #[serde(rename = "amount")]
    pub amount_text: String,
}

impl RawDividendRow {
    pub fn new(date_text: impl Into<String>, amount_text: impl Into<String>) -> Self {
        Self {
            date_text: date_text.into(),
            amount_text: amount_text.into(),
        }
    }
}

/// A past ex-dividend date and the per-share payout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DividendEvent {
    ex_date: NaiveDate,
    amount: Amount,
}

impl DividendEvent {
    /// Creates an event, rejecting negative amounts.
    pub fn try_new(ex_date: NaiveDate, amount: Amount) -> Result<Self, DomainError> {
        if amount < Decimal::ZERO {
            return Err(DomainError::NegativeAmount { amount });
        }
        Ok(Self { ex_date, amount })
    }

    #[must_use]
    pub const fn ex_date(&self) -> NaiveDate {
        self.ex_date
    }

    #[must_use]
    pub const fn amount(&self) -> Amount {
        self.amount
    }
}
