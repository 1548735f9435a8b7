//! Calendar arithmetic for ex-dividend dates.
//!
//! Only two operations are needed: how many days a month has, and which
//! calendar day precedes a given one. Both work off a fixed day-count table
//! with the Gregorian leap-year rule applied to February.
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use divstrip::domain::calendar::{days_in_month, previous_day};
//!
//! assert_eq!(days_in_month(2, 2000).unwrap(), 29);
//!
//! let march_first = NaiveDate::from_ymd_opt(2020, 3, 1).unwrap();
//! assert_eq!(previous_day(march_first), NaiveDate::from_ymd_opt(2020, 2, 29).unwrap());
//! ```

use chrono::{Datelike, NaiveDate};

use super::error::DomainError;

/// Days per month for a common year, January first.
const DAYS_PER_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Returns `true` for Gregorian leap years.
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1-based) of `year`.
pub fn days_in_month(month: u32, year: i32) -> Result<u32, DomainError> {
    if !(1..=12).contains(&month) {
        return Err(DomainError::invalid_date(
            format!("{year}-{month}"),
            "month must be between 1 and 12",
        ));
    }
    Ok(last_day(month, year))
}

// Caller guarantees 1 <= month <= 12.
fn last_day(month: u32, year: i32) -> u32 {
    if month == 2 && is_leap_year(year) {
        29
    } else {
        DAYS_PER_MONTH[(month - 1) as usize]
    }
}

/// The calendar day immediately before `date`.
///
/// The first of a month maps to the last day of the previous month, and
/// January 1 maps to December 31 of the previous year.
#[must_use]
pub fn previous_day(date: NaiveDate) -> NaiveDate {
    let (year, month, day) = match (date.year(), date.month(), date.day()) {
        (year, month, day) if day > 1 => (year, month, day - 1),
        (year, 1, _) => (year - 1, 12, 31),
        (year, month, _) => (year, month - 1, last_day(month - 1, year)),
    };

    // Only fails below chrono's minimum year.
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(date)
}

/// Parse a `YYYY-MM-DD` date. Month and day may be unpadded.
pub fn parse_iso_date(text: &str) -> Result<NaiveDate, DomainError> {
    let trimmed = text.trim();
    let parts: Vec<&str> = trimmed.split('-').collect();
    let [year, month, day] = parts.as_slice() else {
        return Err(DomainError::invalid_date(trimmed, "expected YYYY-MM-DD"));
    };

    let year: i32 = year
        .parse()
        .map_err(|_| DomainError::invalid_date(trimmed, "year is not a number"))?;
    let month: u32 = month
        .parse()
        .map_err(|_| DomainError::invalid_date(trimmed, "month is not a number"))?;
    let day: u32 = day
        .parse()
        .map_err(|_| DomainError::invalid_date(trimmed, "day is not a number"))?;

    build_date(trimmed, year, month, day)
}

/// Build a date, checking the day against [`days_in_month`].
pub fn build_date(input: &str, year: i32, month: u32, day: u32) -> Result<NaiveDate, DomainError> {
    let last = days_in_month(month, year).map_err(|_| {
        DomainError::invalid_date(input, format!("month {month} is out of range"))
    })?;
    if day == 0 || day > last {
        return Err(DomainError::invalid_date(
            input,
            format!("day {day} is out of range for month {month}"),
        ));
    }

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| DomainError::invalid_date(input, "date is outside the supported range"))
}

/// String form of [`previous_day`]: `"2020-03-01"` becomes `"2020-02-29"`.
pub fn previous_day_str(text: &str) -> Result<String, DomainError> {
    let date = parse_iso_date(text)?;
    Ok(previous_day(date).format("%Y-%m-%d").to_string())
}
