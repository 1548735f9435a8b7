//! Infrastructure: configuration, logging and wiring of adapters.

pub mod bootstrap;
pub mod config;
