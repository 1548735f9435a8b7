//! Domain validation errors for scraped dividend data.
//!
//! These errors are local and recoverable: a caller that hits one skips the
//! offending row and keeps going.
//!
//! # Examples
//!
//! ```
//! use divstrip::domain::error::DomainError;
//! use divstrip::domain::DividendEvent;
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//!
//! let date = NaiveDate::from_ymd_opt(2023, 1, 5).unwrap();
//! let result = DividendEvent::try_new(date, dec!(-0.42));
//!
//! assert!(matches!(result, Err(DomainError::NegativeAmount { .. })));
//! ```

use thiserror::Error;

/// Errors raised while turning scraped text into domain values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Date text could not be read as a calendar date.
    #[error("invalid date '{input}': {reason}")]
    InvalidDate {
        /// The offending text.
        input: String,
        /// What was wrong with it.
        reason: String,
    },

    /// Month abbreviation is not one of the twelve known ones.
    #[error("unknown month abbreviation '{abbrev}'")]
    UnknownMonth {
        /// The unrecognized abbreviation.
        abbrev: String,
    },

    /// Amount text is not a dollar-formatted number.
    #[error("malformed amount '{input}'")]
    MalformedAmount {
        /// The offending text.
        input: String,
    },

    /// Dividend amounts cannot be negative.
    #[error("dividend amount must be non-negative, got {amount}")]
    NegativeAmount {
        /// The invalid amount that was provided.
        amount: rust_decimal::Decimal,
    },
}

impl DomainError {
    pub(crate) fn invalid_date(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidDate {
            input: input.into(),
            reason: reason.into(),
        }
    }
}
