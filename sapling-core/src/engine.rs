//! Configured entry point for spanning tree runs.

use tracing::{info, instrument};

use crate::{
    error::MstError,
    graph::Graph,
    heap::HeapMergeStrategy,
    mst::{self, Driver, PartialTreeQueue, SpanningTree},
};

/// Runs the partial-tree merge algorithm with a fixed configuration.
///
/// # Examples
/// ```
/// use sapling_core::{EngineBuilder, GraphBuilder};
///
/// let mut builder = GraphBuilder::new();
/// for name in ["A", "B", "C", "D"] {
///     builder.add_vertex(name)?;
/// }
/// builder.add_edge_by_name("A", "B", 1)?;
/// builder.add_edge_by_name("B", "C", 2)?;
/// builder.add_edge_by_name("C", "D", 1)?;
/// builder.add_edge_by_name("A", "D", 4)?;
/// builder.add_edge_by_name("B", "D", 3)?;
/// let graph = builder.build();
///
/// let tree = EngineBuilder::new().build().run(&graph)?;
/// assert_eq!(tree.arcs().len(), 3);
/// assert_eq!(tree.total_weight(), 4);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Engine {
    merge_strategy: HeapMergeStrategy,
    path_compression: bool,
    invariant_checks: bool,
}

impl Default for Engine {
    fn default() -> Self {
        crate::builder::EngineBuilder::new().build()
    }
}

impl Engine {
    pub(crate) const fn new(
        merge_strategy: HeapMergeStrategy,
        path_compression: bool,
        invariant_checks: bool,
    ) -> Self {
        Self {
            merge_strategy,
            path_compression,
            invariant_checks,
        }
    }

    /// Returns the heap merge strategy.
    #[must_use]
    #[rustfmt::skip]
    pub fn merge_strategy(&self) -> HeapMergeStrategy { self.merge_strategy }

    /// Returns whether component lookups compress paths.
    #[must_use]
    #[rustfmt::skip]
    pub fn path_compression(&self) -> bool { self.path_compression }

    /// Returns whether partition checks run after every merge.
    #[must_use]
    #[rustfmt::skip]
    pub fn invariant_checks(&self) -> bool { self.invariant_checks }

    /// Builds the singleton queue for `graph` using this configuration.
    #[must_use]
    pub fn initialize<'g>(&self, graph: &'g Graph) -> PartialTreeQueue<'g> {
        mst::initialize(graph).with_path_compression(self.path_compression)
    }

    /// Runs the merge loop over a prepared queue.
    ///
    /// # Errors
    /// See [`crate::execute`].
    pub fn execute(&self, queue: PartialTreeQueue<'_>) -> Result<SpanningTree, MstError> {
        self.driver().run(queue)
    }

    /// Initializes and executes in one step.
    ///
    /// # Errors
    /// See [`crate::execute`].
    #[instrument(
        name = "engine.run",
        err,
        skip(self, graph),
        fields(vertices = graph.len(), edges = graph.edge_count()),
    )]
    pub fn run(&self, graph: &Graph) -> Result<SpanningTree, MstError> {
        let tree = self.execute(self.initialize(graph))?;
        info!(
            arcs = tree.arcs().len(),
            total_weight = tree.total_weight(),
            stale_arcs_discarded = tree.stats().stale_arcs_discarded(),
            "minimum spanning tree built"
        );
        Ok(tree)
    }

    fn driver(&self) -> Driver {
        Driver {
            merge_strategy: self.merge_strategy,
            invariant_checks: self.invariant_checks,
        }
    }
}
