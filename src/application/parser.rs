//! Dividend history parsing.
//!
//! Turns scraped `("Jan 5, 2023", "$0.42")` rows into [`DividendEvent`]s.
//! Rows come most-recent first, so parsing stops at the first row older than
//! the lookback window: the price source has no coverage before it.

use chrono::{Datelike, Local, NaiveDate};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;
use tracing::debug;

use crate::domain::calendar::build_date;
use crate::domain::{DividendEvent, DomainError, RawDividendRow};

/// Month abbreviations in calendar order.
const MONTHS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// Configuration for [`DividendEventParser`].
#[derive(Debug, Clone, Deserialize)]
pub struct ParserConfig {
    /// Year the lookback window is measured from. Defaults to the local
    /// calendar year at startup.
    #[serde(default = "default_current_year")]
    pub current_year: i32,

    /// Rows dated before `current_year - lookback_years` end parsing.
    #[serde(default = "default_lookback_years")]
    pub lookback_years: i32,
}

fn default_current_year() -> i32 {
    Local::now().year()
}

fn default_lookback_years() -> i32 {
    5
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            current_year: default_current_year(),
            lookback_years: default_lookback_years(),
        }
    }
}

impl ParserConfig {
    /// Oldest year still inside the window.
    #[must_use]
    pub fn earliest_year(&self) -> i32 {
        self.current_year - self.lookback_years
    }
}

/// A row that failed to parse, by position in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRow {
    pub index: usize,
    pub row: RawDividendRow,
    pub error: DomainError,
}

/// Everything [`DividendEventParser::parse`] produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    /// Parsed events, in input order.
    pub events: Vec<DividendEvent>,
    /// Rows skipped because they could not be parsed.
    pub rejected: Vec<RejectedRow>,
    /// Year of the row that ended parsing, if the window was hit.
    pub halted_at_year: Option<i32>,
}

/// Parser for scraped dividend history rows.
#[derive(Debug, Clone)]
pub struct DividendEventParser {
    config: ParserConfig,
}

impl DividendEventParser {
    #[must_use]
    pub const fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse every row up to the lookback cutoff.
    ///
    /// Malformed rows are recorded in [`ParseReport::rejected`] and skipped.
    /// The first row older than the window stops the loop without error.
    pub fn parse(&self, rows: &[RawDividendRow]) -> ParseReport {
        let mut report = ParseReport::default();
        let earliest = self.config.earliest_year();

        for (index, row) in rows.iter().enumerate() {
            let date = match parse_date(&row.date_text) {
                Ok(date) => date,
                Err(error) => {
                    report.rejected.push(RejectedRow {
                        index,
                        row: row.clone(),
                        error,
                    });
                    continue;
                }
            };

            if date.year() < earliest {
                debug!(
                    year = date.year(),
                    earliest,
                    remaining = rows.len() - index,
                    "dividend history older than lookback window"
                );
                report.halted_at_year = Some(date.year());
                break;
            }

            match parse_amount(&row.amount_text).and_then(|a| DividendEvent::try_new(date, a)) {
                Ok(event) => report.events.push(event),
                Err(error) => report.rejected.push(RejectedRow {
                    index,
                    row: row.clone(),
                    error,
                }),
            }
        }

        report
    }

    /// Parse a single row, ignoring the lookback window.
    pub fn parse_row(&self, row: &RawDividendRow) -> Result<DividendEvent, DomainError> {
        let date = parse_date(&row.date_text)?;
        let amount = parse_amount(&row.amount_text)?;
        DividendEvent::try_new(date, amount)
    }
}

/// Month number (1-based) for a case-insensitive three-letter abbreviation.
pub fn month_number(abbrev: &str) -> Result<u32, DomainError> {
    let lower = abbrev.trim().to_ascii_lowercase();
    MONTHS
        .iter()
        .position(|m| *m == lower)
        .map(|i| i as u32 + 1)
        .ok_or(DomainError::UnknownMonth { abbrev: lower })
}

/// Parse `"<month-abbrev> <day>, <year>"`.
pub fn parse_date(text: &str) -> Result<NaiveDate, DomainError> {
    let cleaned = text.replace(',', " ");
    let parts: Vec<&str> = cleaned.split_whitespace().collect();
    let [month, day, year] = parts.as_slice() else {
        return Err(DomainError::invalid_date(
            text.trim(),
            "expected '<month> <day>, <year>'",
        ));
    };

    let month = month_number(month)?;
    let day: u32 = day
        .parse()
        .map_err(|_| DomainError::invalid_date(text.trim(), "day is not a number"))?;
    let year: i32 = year
        .parse()
        .map_err(|_| DomainError::invalid_date(text.trim(), "year is not a number"))?;

    build_date(text.trim(), year, month, day)
}

/// Parse a dollar amount such as `"$1.23"` or `"1,024.50"`.
pub fn parse_amount(text: &str) -> Result<Decimal, DomainError> {
    let trimmed = text.trim();
    let digits = trimmed.strip_prefix('$').unwrap_or(trimmed).replace(',', "");

    Decimal::from_str(digits.trim()).map_err(|_| DomainError::MalformedAmount {
        input: trimmed.to_string(),
    })
}
