//! Benchmark support crate for sapling.
//!
//! Provides seeded synthetic graph generators and parameter types used by
//! the Criterion benchmarks of the partial-tree merge engine.

pub mod error;
pub mod graph;
pub mod params;
