//! Adapters for the hexagonal ports.

pub mod inbound;
pub mod outbound;
