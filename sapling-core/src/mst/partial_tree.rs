//! Partial trees: connected components of the forest under construction.

use std::fmt;

use crate::{
    arc::Arc,
    error::GraphError,
    graph::{Graph, Vertex, VertexId},
    heap::{HeapMergeStrategy, MinHeap},
};

/// One component of the spanning forest under construction.
///
/// The heap holds arcs whose near endpoint lies in this tree. Their far
/// endpoints may since have joined the tree; such stale arcs stay in the heap
/// until they are popped.
#[derive(Clone, Debug)]
pub struct PartialTree {
    root: VertexId,
    arcs: MinHeap<Arc>,
    vertex_count: usize,
}

impl PartialTree {
    /// Creates a single-vertex tree rooted at `vertex`, seeded with one arc
    /// per adjacency entry.
    ///
    /// Component membership is left untouched; [`initialize`](crate::initialize)
    /// is what resets every vertex to its own root.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertexId`] when `vertex` is not in `graph`.
    pub fn singleton(graph: &Graph, vertex: VertexId) -> Result<Self, GraphError> {
        let entry = graph.vertex(vertex)?;
        Ok(Self::seed(vertex, entry))
    }

    pub(crate) fn seed(id: VertexId, vertex: &Vertex) -> Self {
        let mut arcs = MinHeap::with_capacity(vertex.neighbors().len());
        for neighbor in vertex.neighbors() {
            arcs.insert(Arc::new(id, neighbor.vertex(), neighbor.weight()));
        }
        Self {
            root: id,
            arcs,
            vertex_count: 1,
        }
    }

    /// Returns the representative vertex of the tree's component.
    #[must_use]
    #[rustfmt::skip]
    pub fn root(&self) -> VertexId { self.root }

    /// Returns the candidate boundary arcs, stale ones included.
    #[must_use]
    #[rustfmt::skip]
    pub fn arcs(&self) -> &MinHeap<Arc> { &self.arcs }

    /// Returns the number of vertices merged into this tree.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_count(&self) -> usize { self.vertex_count }

    pub(crate) fn arcs_mut(&mut self) -> &mut MinHeap<Arc> {
        &mut self.arcs
    }

    /// Absorbs `other` into `self`.
    ///
    /// The root of `other` is re-parented under the root of `self`, which is the
    /// only point at which component membership changes. The heaps are combined
    /// with `strategy`; no arcs are dropped.
    pub fn merge(&mut self, graph: &Graph, other: Self, strategy: HeapMergeStrategy) {
        graph.link(other.root, self.root);
        self.vertex_count += other.vertex_count;
        self.arcs.absorb(other.arcs, strategy);
    }

    /// Formats the tree with vertex names taken from `graph`.
    #[must_use]
    pub const fn display<'a>(&'a self, graph: &'a Graph) -> TreeDisplay<'a> {
        TreeDisplay { tree: self, graph }
    }
}

/// [`fmt::Display`] adapter rendering a tree as `root: arc, arc, ...`.
///
/// Arcs are listed in nondecreasing weight order.
#[derive(Clone, Copy, Debug)]
pub struct TreeDisplay<'a> {
    tree: &'a PartialTree,
    graph: &'a Graph,
}

impl fmt::Display for TreeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut arcs: Vec<&Arc> = self.tree.arcs.iter().collect();
        arcs.sort_by_key(|arc| (arc.weight(), arc.near(), arc.far()));

        write!(f, "{}:", self.graph.name(self.tree.root))?;
        for (position, arc) in arcs.iter().enumerate() {
            let separator = if position == 0 { " " } else { ", " };
            write!(f, "{separator}{}", arc.display(self.graph))?;
        }
        Ok(())
    }
}
