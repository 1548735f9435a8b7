//! Command-line interface definitions.
//!
//! Defines the CLI structure for divstrip using `clap`: scanning tickers,
//! refreshing the upcoming ex-dividend report, listing report tickers and
//! managing configuration.

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;

/// Dividend-capture backtesting CLI
#[derive(Parser, Debug)]
#[command(name = "divstrip")]
#[command(version)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score dividend recovery for seed, listed and reported tickers
    Scan(ScanArgs),

    /// Fetch upcoming ex-dividend dates and write the report file
    Upcoming(ConfigPathArg),

    /// List tickers found in the report file
    Tickers(ConfigPathArg),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `divstrip config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Write a documented configuration template.
    Init(ConfigInitArgs),
    /// Display the effective configuration with defaults applied.
    Show(ConfigPathArg),
    /// Validate the configuration file.
    Validate(ConfigPathArg),
}

/// Shared argument for commands that only need a config path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,
}

/// Arguments for `config init`.
#[derive(Parser, Debug)]
pub struct ConfigInitArgs {
    /// Where to write the template
    #[arg(default_value = "config.toml")]
    pub path: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `scan` subcommand.
#[derive(Parser, Debug)]
pub struct ScanArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Tickers to scan in addition to the configured seed list
    pub tickers: Vec<String>,

    /// Refresh the upcoming ex-dividend report before scanning
    #[arg(long)]
    pub refresh: bool,

    /// Ignore tickers from the report file
    #[arg(long)]
    pub no_report: bool,

    /// Override the dataset directory
    #[arg(long)]
    pub dataset: Option<PathBuf>,

    /// Override the minimum per-share margin
    #[arg(long)]
    pub margin: Option<Decimal>,

    /// Override the lookback window in years
    #[arg(long)]
    pub lookback_years: Option<i32>,

    /// Override the year the lookback window is measured from
    #[arg(long)]
    pub current_year: Option<i32>,

    /// Override the delay between price requests, in milliseconds
    #[arg(long)]
    pub request_delay_ms: Option<u64>,
}
