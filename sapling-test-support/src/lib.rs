//! Shared test utilities used across sapling crates.

pub mod ci;
pub mod tracing;
