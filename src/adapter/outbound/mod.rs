//! Outbound adapters: implementations of the data source ports.

pub mod dataset;
pub mod report_file;
