//! Application services: parsing, scoring, reporting and scanning.

pub mod evaluator;
pub mod parser;
pub mod report;
pub mod scanner;

pub use evaluator::{BarPair, EvaluatorConfig, RecoveryEvaluator};
pub use parser::{DividendEventParser, ParseReport, ParserConfig, RejectedRow};
pub use report::{extract_tickers, format_report};
pub use scanner::{collect_tickers, BatchSummary, ScanConfig, TickerReport, TickerScanner, TickerStatus};
