//! Minimum spanning tree construction by partial-tree merging.
//!
//! [`initialize`] seeds one singleton [`PartialTree`] per vertex. [`execute`]
//! then repeats until one tree is left: dequeue the front tree, pop its heap
//! until an arc leaves the tree's component, accept that arc, pull the tree on
//! the far side out of the queue, merge it into the popped tree and append the
//! result. Each round removes one tree, so a connected graph of `n` vertices
//! finishes after `n - 1` rounds with `n - 1` accepted arcs.
//!
//! The accepted arc is the cheapest known arc crossing the popped tree's
//! boundary, so by the cut property it belongs to some minimum spanning tree.

mod partial_tree;
mod queue;

use tracing::{Span, debug, field, instrument, trace, warn};

use crate::{
    arc::Arc,
    error::{MstError, QueueError},
    graph::Graph,
    heap::HeapMergeStrategy,
};

pub use self::{
    partial_tree::{PartialTree, TreeDisplay},
    queue::PartialTreeQueue,
};

/// Counters describing a completed run.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct RunStats {
    initial_trees: usize,
    iterations: usize,
    stale_arcs_discarded: usize,
}

impl RunStats {
    /// Returns the number of trees queued when the run started.
    #[must_use]
    #[rustfmt::skip]
    pub fn initial_trees(&self) -> usize { self.initial_trees }

    /// Returns the number of merge rounds performed.
    #[must_use]
    #[rustfmt::skip]
    pub fn iterations(&self) -> usize { self.iterations }

    /// Returns the number of popped arcs that pointed back into their own tree.
    #[must_use]
    #[rustfmt::skip]
    pub fn stale_arcs_discarded(&self) -> usize { self.stale_arcs_discarded }
}

/// Arcs accepted by a completed run.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SpanningTree {
    arcs: Vec<Arc>,
    stats: RunStats,
}

impl SpanningTree {
    /// Returns the accepted arcs in acceptance order.
    #[must_use]
    pub fn arcs(&self) -> &[Arc] {
        &self.arcs
    }

    /// Returns the run counters.
    #[must_use]
    #[rustfmt::skip]
    pub fn stats(&self) -> RunStats { self.stats }

    /// Returns the sum of accepted arc weights.
    #[must_use]
    pub fn total_weight(&self) -> u64 {
        self.arcs.iter().map(|arc| u64::from(arc.weight())).sum()
    }

    /// Consumes the tree, returning the accepted arcs.
    #[must_use]
    pub fn into_arcs(self) -> Vec<Arc> {
        self.arcs
    }
}

/// Builds the initial queue: one singleton tree per vertex, in vertex order.
///
/// Every vertex is reset to be the root of its own component.
#[instrument(name = "mst.initialize", skip(graph), fields(vertices = graph.len()))]
pub fn initialize(graph: &Graph) -> PartialTreeQueue<'_> {
    graph.reset_components();
    let mut queue = PartialTreeQueue::new(graph);
    for (id, vertex) in graph.vertex_ids().zip(graph.vertices()) {
        queue.append(PartialTree::seed(id, vertex));
    }
    debug!(trees = queue.len(), "seeded singleton partial trees");
    queue
}

/// Runs the merge loop to completion with the default heap merge strategy.
///
/// # Errors
/// Returns [`MstError::EmptyGraph`] for an empty queue and
/// [`MstError::Disconnected`] when a tree runs out of boundary arcs before a
/// single tree remains. The remaining variants report broken bookkeeping.
///
/// # Examples
/// ```
/// use sapling_core::{GraphBuilder, MstError, execute, initialize};
///
/// let mut builder = GraphBuilder::new();
/// builder.add_vertex("A")?;
/// builder.add_vertex("B")?;
/// let graph = builder.build();
///
/// let err = execute(initialize(&graph)).expect_err("no edge joins A and B");
/// assert!(matches!(err, MstError::Disconnected { .. }));
/// # Ok::<(), sapling_core::GraphError>(())
/// ```
pub fn execute(queue: PartialTreeQueue<'_>) -> Result<Vec<Arc>, MstError> {
    Driver::default().run(queue).map(SpanningTree::into_arcs)
}

/// Merge loop configuration.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Driver {
    pub(crate) merge_strategy: HeapMergeStrategy,
    pub(crate) invariant_checks: bool,
}

impl Driver {
    #[instrument(
        name = "mst.execute",
        err,
        skip(self, queue),
        fields(
            trees = queue.len(),
            strategy = self.merge_strategy.as_str(),
            arcs = field::Empty,
            total_weight = field::Empty,
        ),
    )]
    pub(crate) fn run(self, mut queue: PartialTreeQueue<'_>) -> Result<SpanningTree, MstError> {
        if queue.is_empty() {
            return Err(MstError::EmptyGraph);
        }
        let graph = queue.graph();
        let mut stats = RunStats {
            initial_trees: queue.len(),
            ..RunStats::default()
        };
        let mut arcs = Vec::with_capacity(queue.len() - 1);

        if self.invariant_checks {
            queue.check_partition()?;
        }

        while queue.len() > 1 {
            let mut ptx = queue.remove_front().map_err(|_| MstError::EmptyQueue)?;
            let arc = next_cross_arc(&queue, &mut ptx, &mut stats)?;
            let pty = queue
                .remove_tree_containing(arc.far())
                .map_err(|err| tree_lookup_error(graph, err))?;

            debug!(
                arc = %arc.display(graph),
                absorbed_root = graph.name(pty.root()),
                survivor_root = graph.name(ptx.root()),
                "accepted arc"
            );
            #[cfg(feature = "metrics")]
            record_merge(&ptx, &pty);

            ptx.merge(graph, pty, self.merge_strategy);
            queue.append(ptx);
            arcs.push(arc);
            stats.iterations += 1;

            if self.invariant_checks {
                queue.check_partition()?;
            }
        }

        let tree = SpanningTree { arcs, stats };
        let span = Span::current();
        span.record("arcs", tree.arcs.len());
        span.record("total_weight", tree.total_weight());
        debug!(
            iterations = stats.iterations,
            stale_arcs_discarded = stats.stale_arcs_discarded,
            "spanning tree complete"
        );
        Ok(tree)
    }
}

/// Pops arcs from `ptx` until one leaves its component.
///
/// Arcs whose far endpoint already shares the tree's root are stale and are
/// dropped.
fn next_cross_arc(
    queue: &PartialTreeQueue<'_>,
    ptx: &mut PartialTree,
    stats: &mut RunStats,
) -> Result<Arc, MstError> {
    let graph = queue.graph();
    loop {
        let Ok(arc) = ptx.arcs_mut().delete_min() else {
            warn!(
                root = graph.name(ptx.root()),
                remaining_trees = queue.len(),
                "partial tree exhausted its boundary arcs"
            );
            return Err(MstError::Disconnected {
                root: ptx.root(),
                root_name: graph.name(ptx.root()).to_owned(),
                remaining_trees: queue.len(),
            });
        };

        if queue.find(arc.far()) != ptx.root() {
            return Ok(arc);
        }

        stats.stale_arcs_discarded += 1;
        trace!(arc = %arc.display(graph), "discarded stale arc");
        #[cfg(feature = "metrics")]
        metrics::counter!("mst_stale_arcs_discarded").increment(1);
    }
}

fn tree_lookup_error(graph: &Graph, err: QueueError) -> MstError {
    match err {
        QueueError::TreeNotFound { vertex, root } => MstError::TreeNotFound {
            vertex,
            vertex_name: graph.name(vertex).to_owned(),
            root,
        },
        QueueError::Empty => MstError::EmptyQueue,
    }
}

#[cfg(feature = "metrics")]
fn record_merge(ptx: &PartialTree, pty: &PartialTree) {
    metrics::counter!("mst_merges").increment(1);
    let combined = ptx.arcs().len() + pty.arcs().len();
    metrics::histogram!("mst_heap_size_at_merge").record(combined as f64);
}


#[cfg(test)]
mod property;
