//! Upcoming ex-dividend listings as scraped from the listings page.

use serde::{Deserialize, Serialize};

use super::id::Ticker;

/// One listing row: ticker, company, amount and three auxiliary columns.
///
/// Fields are kept as scraped; nothing is validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[String; 6]", into = "[String; 6]")]
pub struct ExDateRow {
    pub ticker: String,
    pub company: String,
    pub amount: String,
    pub extra: [String; 3],
}

impl ExDateRow {
    pub fn new(
        ticker: impl Into<String>,
        company: impl Into<String>,
        amount: impl Into<String>,
        extra: [&str; 3],
    ) -> Self {
        Self {
            ticker: ticker.into(),
            company: company.into(),
            amount: amount.into(),
            extra: extra.map(str::to_string),
        }
    }

    /// The six fields in column order.
    #[must_use]
    pub fn fields(&self) -> [&str; 6] {
        [
            self.ticker.as_str(),
            self.company.as_str(),
            self.amount.as_str(),
            self.extra[0].as_str(),
            self.extra[1].as_str(),
            self.extra[2].as_str(),
        ]
    }

    #[must_use]
    pub fn ticker(&self) -> Ticker {
        Ticker::new(&self.ticker)
    }
}

impl From<[String; 6]> for ExDateRow {
    fn from([ticker, company, amount, a, b, c]: [String; 6]) -> Self {
        Self {
            ticker,
            company,
            amount,
            extra: [a, b, c],
        }
    }
}

impl From<ExDateRow> for [String; 6] {
    fn from(row: ExDateRow) -> Self {
        let [a, b, c] = row.extra;
        [row.ticker, row.company, row.amount, a, b, c]
    }
}

/// Rows sharing one ex-dividend date label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExDateGroup {
    pub label: String,
    pub rows: Vec<ExDateRow>,
}

impl ExDateGroup {
    pub fn new(label: impl Into<String>, rows: Vec<ExDateRow>) -> Self {
        Self {
            label: label.into(),
            rows,
        }
    }
}
