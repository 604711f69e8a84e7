//! Benchmark setup error type.
//!
//! Lets setup functions propagate failures with `?` instead of panicking
//! inside Criterion closures.

use sapling_core::{GraphError, MstError};

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// A synthetic graph requested zero vertices.
    #[error("vertex count must be greater than zero")]
    ZeroVertices,
    /// The requested average degree cannot be reached on a simple graph of
    /// this size.
    #[error("average degree {degree} is not achievable with {vertex_count} vertices")]
    DegreeTooHigh {
        /// Requested average degree.
        degree: usize,
        /// Requested vertex count.
        vertex_count: usize,
    },
    /// Graph construction rejected a generated vertex or edge.
    #[error("graph construction failed: {0}")]
    Graph(#[from] GraphError),
    /// The engine failed on a generated graph.
    #[error("MST computation failed: {0}")]
    Mst(#[from] MstError),
}
