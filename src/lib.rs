//! Divstrip - dividend-capture recovery backtesting.
//!
//! For each ticker the crate walks a recent window of dividend history and
//! asks, per ex-dividend date: did the stock trade back above the previous
//! close plus a small margin on the ex-date itself? Tallies of successes and
//! failures per ticker are the output. A companion report lists upcoming
//! ex-dividend dates and feeds extra tickers into a scan.
//!
//! # Modules
//!
//! - [`domain`] - Calendar arithmetic, dividend events, price bars, outcomes
//! - [`application`] - History parser, recovery evaluator, report format, scanner
//! - [`port`] - Traits for dividend history, price and upcoming-date sources
//! - [`adapter`] - JSON dataset and report file adapters, CLI
//! - [`infrastructure`] - Configuration, logging and wiring
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use divstrip::application::{EvaluatorConfig, RecoveryEvaluator};
//!
//! let evaluator = RecoveryEvaluator::new(EvaluatorConfig::default());
//! assert_eq!(evaluator.config().margin.to_string(), "0.10");
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
