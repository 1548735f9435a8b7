//! Source-agnostic domain types: dates, dividends, price bars, outcomes.

pub mod calendar;
pub mod dividend;
pub mod error;
pub mod id;
pub mod money;
pub mod price;
pub mod recovery;
pub mod upcoming;

pub use dividend::{DividendEvent, RawDividendRow};
pub use error::DomainError;
pub use id::Ticker;
pub use money::{Amount, Price};
pub use price::PriceBar;
pub use recovery::{Outcome, PostPrice, RecoveryOutcome, SkipReason, TickerTally};
pub use upcoming::{ExDateGroup, ExDateRow};
