//! Weighted arcs between two vertices.

use std::fmt;

use crate::{
    graph::{Graph, VertexId, Weight},
    heap::Weighted,
};

/// A directed view of an undirected edge: `near` lies in the tree that
/// recorded the arc, `far` may or may not.
///
/// Arcs are immutable once created.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Arc {
    near: VertexId,
    far: VertexId,
    weight: Weight,
}

impl Arc {
    /// Creates an arc from `near` to `far`.
    #[must_use]
    pub const fn new(near: VertexId, far: VertexId, weight: Weight) -> Self {
        Self { near, far, weight }
    }

    /// Returns the endpoint inside the recording tree.
    #[must_use]
    #[rustfmt::skip]
    pub const fn near(&self) -> VertexId { self.near }

    /// Returns the endpoint that may lie outside the recording tree.
    #[must_use]
    #[rustfmt::skip]
    pub const fn far(&self) -> VertexId { self.far }

    /// Returns the arc weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> Weight { self.weight }

    /// Returns `true` when both arcs describe the same undirected edge.
    #[must_use]
    pub fn same_edge(&self, other: &Self) -> bool {
        self.weight == other.weight
            && ((self.near == other.near && self.far == other.far)
                || (self.near == other.far && self.far == other.near))
    }

    /// Formats the arc with vertex names taken from `graph`.
    #[must_use]
    pub const fn display<'a>(&'a self, graph: &'a Graph) -> ArcDisplay<'a> {
        ArcDisplay { arc: self, graph }
    }
}

impl Weighted for Arc {
    type Key = Weight;

    fn weight(&self) -> Weight {
        self.weight
    }
}

/// [`fmt::Display`] adapter rendering an arc as `near -- far (weight)`.
#[derive(Clone, Copy, Debug)]
pub struct ArcDisplay<'a> {
    arc: &'a Arc,
    graph: &'a Graph,
}

impl fmt::Display for ArcDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -- {} ({})",
            self.graph.name(self.arc.near),
            self.graph.name(self.arc.far),
            self.arc.weight
        )
    }
}
