//! Infrastructure bootstrap helpers for runtime wiring.

use std::sync::Arc;

use tracing::info;

use crate::adapter::outbound::dataset::DatasetSource;
use crate::application::{DividendEventParser, RecoveryEvaluator, TickerScanner};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Open the configured dataset. Fails if the directory is missing.
pub fn open_dataset(config: &Config) -> Result<Arc<DatasetSource>> {
    let dataset = DatasetSource::open(&config.dataset.dir)?;
    info!(dir = %config.dataset.dir.display(), "dataset opened");
    Ok(Arc::new(dataset))
}

/// Build a scanner reading history and prices from `dataset`.
#[must_use]
pub fn build_scanner(config: &Config, dataset: Arc<DatasetSource>) -> TickerScanner {
    info!(
        current_year = config.parser.current_year,
        lookback_years = config.parser.lookback_years,
        margin = %config.evaluator.margin,
        request_delay_ms = config.scan.request_delay_ms,
        "building scanner"
    );

    TickerScanner::new(
        dataset.clone(),
        dataset,
        DividendEventParser::new(config.parser.clone()),
        RecoveryEvaluator::new(config.evaluator.clone()),
        &config.scan,
    )
}
