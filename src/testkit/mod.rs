//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`sources`] - In-memory [`PriceSource`](crate::port::PriceSource),
//!   [`DividendHistorySource`](crate::port::DividendHistorySource) and
//!   [`UpcomingExDateSource`](crate::port::UpcomingExDateSource) doubles.
//! - [`domain`] - Builders for dates, bars, rows and events.

pub mod domain;
pub mod sources;
