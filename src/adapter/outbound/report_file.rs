//! Persisted upcoming ex-dividend report.

use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, info};

use crate::application::report::{extract_tickers, format_report};
use crate::domain::{ExDateGroup, Ticker};
use crate::error::Result;

/// Write the report, replacing any previous file.
pub async fn write_report(path: &Path, groups: &[ExDateGroup]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }

    tokio::fs::write(path, format_report(groups)).await?;
    info!(
        path = %path.display(),
        groups = groups.len(),
        rows = groups.iter().map(|g| g.rows.len()).sum::<usize>(),
        "wrote upcoming ex-dividend report"
    );
    Ok(())
}

/// Tickers listed in the report, or `None` if the file does not exist.
pub async fn read_report_tickers(path: &Path) -> Result<Option<Vec<Ticker>>> {
    match tokio::fs::read_to_string(path).await {
        Ok(text) => {
            let tickers = extract_tickers(&text);
            debug!(path = %path.display(), tickers = tickers.len(), "read report tickers");
            Ok(Some(tickers))
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}
