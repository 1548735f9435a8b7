//! On-disk dataset fixtures.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Coca-Cola: one recovered event, one flat-open event, one event with no
/// prices, then a row older than a 2023 lookback window of five years.
pub const KO: &str = r#"{
    "dividends": [
        {"date": "Mar 14, 2023", "amount": "$0.46"},
        {"date": "Nov 30, 2022", "amount": "$0.44"},
        {"date": "Sep 14, 2022", "amount": "$0.44"},
        {"date": "Jun 14, 2017", "amount": "$0.37"}
    ],
    "prices": {
        "2023-03-13": {"open": "59.10", "high": "59.80", "low": "58.90", "close": "59.50"},
        "2023-03-14": {"open": "59.00", "high": "60.20", "low": "58.70", "close": "59.90"},
        "2022-11-29": {"open": "63.00", "high": "63.40", "low": "62.80", "close": "63.20"},
        "2022-11-30": {"open": "62.60", "high": "62.60", "low": "62.10", "close": "62.40"}
    }
}"#;

/// Exxon: one event that never recovered.
pub const XOM: &str = r#"{
    "dividends": [
        {"date": "Feb 13, 2023", "amount": "$0.91"}
    ],
    "prices": {
        "2023-02-12": {"open": "115.00", "high": "116.00", "low": "114.50", "close": "116.00"},
        "2023-02-13": {"open": "113.00", "high": "114.00", "low": "112.00", "close": "113.50"}
    }
}"#;

pub const UPCOMING: &str = r#"[
    {"label": "Monday, Jan 8", "rows": [
        ["KO", "Coca-Cola Co", "$0.46", "2.9%", "Quarterly", "Jan 15"],
        ["XOM", "Exxon Mobil", "$0.95", "3.4%", "Quarterly", "Jan 19"]
    ]},
    {"label": "Tuesday, Jan 9", "rows": [
        ["GE", "General Electric", "$0.08", "0.3%", "Quarterly", "Jan 25"]
    ]}
]"#;

/// A temp workspace with `data/` holding KO, XOM and upcoming listings.
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let data = dir.path().join("data");
        fs::create_dir(&data).expect("create data dir");
        fs::write(data.join("KO.json"), KO).expect("write KO");
        fs::write(data.join("XOM.json"), XOM).expect("write XOM");
        fs::write(data.join("upcoming.json"), UPCOMING).expect("write upcoming");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn data_dir(&self) -> PathBuf {
        self.path().join("data")
    }

    pub fn report_path(&self) -> PathBuf {
        self.path().join("upcoming_ex_dates.txt")
    }

    /// Write a config pointing at this workspace, with `extra` appended.
    pub fn write_config(&self, tickers: &[&str], extra: &str) -> PathBuf {
        let tickers: Vec<String> = tickers.iter().map(|t| format!("\"{t}\"")).collect();
        let contents = format!(
            "tickers = [{}]\n\n[dataset]\ndir = {:?}\n\n[report]\npath = {:?}\n\n[parser]\ncurrent_year = 2023\n\n[scan]\nrequest_delay_ms = 0\n\n[logging]\nlevel = \"warn\"\n{extra}",
            tickers.join(", "),
            self.data_dir().display().to_string(),
            self.report_path().display().to_string(),
        );
        let path = self.path().join("config.toml");
        fs::write(&path, contents).expect("write config");
        path
    }
}
