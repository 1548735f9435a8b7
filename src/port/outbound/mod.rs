//! Outbound ports: what the application needs from the outside world.

mod source;

pub use source::{DividendHistorySource, PriceSource, UpcomingExDateSource};
