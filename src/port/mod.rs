//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!                 ┌─────────────────────────┐
//!                 │       Application       │
//!                 │  parser · evaluator ·   │
//!                 │        scanner          │
//!                 └────────────┬────────────┘
//!          ┌───────────────────┼───────────────────┐
//!          ▼                   ▼                   ▼
//!   ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//!   │  Dividend   │     │    Price    │     │  Upcoming   │
//!   │   History   │     │   Source    │     │  Ex-Dates   │
//!   └─────────────┘     └─────────────┘     └─────────────┘
//! ```

pub mod outbound;

pub use outbound::{DividendHistorySource, PriceSource, UpcomingExDateSource};
