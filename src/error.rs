use std::fmt;

use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Errors returned by external data sources.
///
/// Neither variant is fatal: a failed history fetch skips the ticker, a
/// failed price fetch skips the event.
#[derive(Error, Debug, Clone)]
pub enum SourceError {
    #[error("no data for {subject}: {what}")]
    NotFound { subject: String, what: String },

    #[error("fetch failed for {subject}: {reason}")]
    ExternalFetch { subject: String, reason: String },
}

impl SourceError {
    pub fn not_found(subject: impl fmt::Display, what: impl Into<String>) -> Self {
        Self::NotFound {
            subject: subject.to_string(),
            what: what.into(),
        }
    }

    pub fn fetch(subject: impl fmt::Display, reason: impl Into<String>) -> Self {
        Self::ExternalFetch {
            subject: subject.to_string(),
            reason: reason.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Required external resource is unavailable at startup.
    #[error("setup failed: {0}")]
    Setup(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
