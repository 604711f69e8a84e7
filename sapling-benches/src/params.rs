//! Benchmark parameter types.

use std::fmt;

use sapling_core::HeapMergeStrategy;

/// Parameters for one merge-loop benchmark run.
#[derive(Clone, Debug)]
pub struct MstBenchParams {
    /// Number of vertices in the generated graph.
    pub vertex_count: usize,
    /// Average vertex degree of the generated graph.
    pub degree: usize,
    /// Heap merge strategy under test.
    pub strategy: HeapMergeStrategy,
    /// Whether component lookups compress paths.
    pub path_compression: bool,
}

impl fmt::Display for MstBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n={},d={},{}{}",
            self.vertex_count,
            self.degree,
            self.strategy.as_str(),
            if self.path_compression { ",pc" } else { "" },
        )
    }
}
