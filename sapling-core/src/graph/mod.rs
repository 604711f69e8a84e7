//! Weighted undirected graph model.
//!
//! Vertices live in a contiguous arena and are addressed by [`VertexId`]
//! handles. Each vertex keeps its adjacency list in insertion order together
//! with the parent slot used by the component tracker in [`components`].

mod components;

use std::{cell::Cell, collections::HashMap, fmt};

use tracing::debug;

use crate::error::GraphError;

/// Edge weight. Unsigned, so every weight is non-negative by construction.
pub type Weight = u32;

/// Index handle for a vertex in a [`Graph`].
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct VertexId(usize);

impl VertexId {
    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the arena index of the vertex.
    #[must_use]
    #[rustfmt::skip]
    pub const fn index(self) -> usize { self.0 }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One adjacency entry: the neighbouring vertex and the connecting weight.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Neighbor {
    vertex: VertexId,
    weight: Weight,
}

impl Neighbor {
    /// Returns the neighbouring vertex.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex(&self) -> VertexId { self.vertex }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> Weight { self.weight }
}

/// A named vertex with its adjacency list.
#[derive(Debug)]
pub struct Vertex {
    name: String,
    neighbors: Vec<Neighbor>,
    parent: Cell<VertexId>,
}

impl Vertex {
    /// Returns the vertex label.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the adjacency list in insertion order.
    #[must_use]
    pub fn neighbors(&self) -> &[Neighbor] {
        &self.neighbors
    }

    /// Returns the current parent reference used by the component tracker.
    ///
    /// A vertex whose parent is itself is the root of its component.
    #[must_use]
    pub fn parent(&self) -> VertexId {
        self.parent.get()
    }
}

/// Weighted undirected graph.
///
/// The structure never changes after [`GraphBuilder::build`]; only the
/// per-vertex parent references move while a spanning tree is computed.
#[derive(Debug, Default)]
pub struct Graph {
    vertices: Vec<Vertex>,
    names: HashMap<String, VertexId>,
    edge_count: usize,
}

impl Graph {
    /// Returns the number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` when the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the number of undirected edges, self-loops included.
    #[must_use]
    #[rustfmt::skip]
    pub fn edge_count(&self) -> usize { self.edge_count }

    /// Returns all vertices in arena order.
    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Iterates over every vertex id in arena order.
    pub fn vertex_ids(&self) -> impl ExactSizeIterator<Item = VertexId> {
        (0..self.vertices.len()).map(VertexId::new)
    }

    /// Looks up a vertex by id.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertexId`] when `id` is out of range.
    pub fn vertex(&self, id: VertexId) -> Result<&Vertex, GraphError> {
        self.vertices
            .get(id.index())
            .ok_or(GraphError::InvalidVertexId {
                vertex: id,
                vertex_count: self.vertices.len(),
            })
    }

    /// Resolves a vertex name to its id.
    #[must_use]
    pub fn vertex_by_name(&self, name: &str) -> Option<VertexId> {
        self.names.get(name).copied()
    }

    /// Returns the name of `id`, or `"?"` when the id is out of range.
    #[must_use]
    pub fn name(&self, id: VertexId) -> &str {
        self.vertices.get(id.index()).map_or("?", Vertex::name)
    }
}

/// Incrementally assembles a [`Graph`].
///
/// # Examples
/// ```
/// use sapling_core::GraphBuilder;
///
/// let mut builder = GraphBuilder::new();
/// builder.add_vertex("A")?;
/// builder.add_vertex("B")?;
/// builder.add_edge_by_name("A", "B", 7)?;
/// let graph = builder.build();
/// assert_eq!(graph.len(), 2);
/// assert_eq!(graph.edge_count(), 1);
/// # Ok::<(), sapling_core::GraphError>(())
/// ```
#[derive(Debug, Default)]
pub struct GraphBuilder {
    graph: Graph,
}

impl GraphBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder with room for `vertices` vertices.
    #[must_use]
    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            graph: Graph {
                vertices: Vec::with_capacity(vertices),
                names: HashMap::with_capacity(vertices),
                edge_count: 0,
            },
        }
    }

    /// Adds a vertex and returns its id.
    ///
    /// # Errors
    /// Returns [`GraphError::DuplicateVertex`] when `name` is already present.
    pub fn add_vertex(&mut self, name: impl Into<String>) -> Result<VertexId, GraphError> {
        let name = name.into();
        if self.graph.names.contains_key(&name) {
            return Err(GraphError::DuplicateVertex { name });
        }
        let id = VertexId::new(self.graph.vertices.len());
        self.graph.names.insert(name.clone(), id);
        self.graph.vertices.push(Vertex {
            name,
            neighbors: Vec::new(),
            parent: Cell::new(id),
        });
        Ok(id)
    }

    /// Adds an undirected edge between two existing vertices.
    ///
    /// The edge is recorded in both adjacency lists; a self-loop is recorded
    /// once.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertexId`] when either id is out of range.
    pub fn add_edge(
        &mut self,
        left: VertexId,
        right: VertexId,
        weight: Weight,
    ) -> Result<(), GraphError> {
        let vertex_count = self.graph.vertices.len();
        for id in [left, right] {
            if id.index() >= vertex_count {
                return Err(GraphError::InvalidVertexId {
                    vertex: id,
                    vertex_count,
                });
            }
        }

        self.push_neighbor(left, right, weight);
        if left != right {
            self.push_neighbor(right, left, weight);
        } else {
            debug!(vertex = %left, weight, "recorded self-loop");
        }
        self.graph.edge_count += 1;
        Ok(())
    }

    /// Adds an undirected edge between two vertices identified by name.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownVertex`] when either name is missing.
    pub fn add_edge_by_name(
        &mut self,
        left: &str,
        right: &str,
        weight: Weight,
    ) -> Result<(), GraphError> {
        let left_id = self.resolve(left)?;
        let right_id = self.resolve(right)?;
        self.add_edge(left_id, right_id, weight)
    }

    /// Finishes construction.
    #[must_use]
    pub fn build(self) -> Graph {
        self.graph
    }

    fn resolve(&self, name: &str) -> Result<VertexId, GraphError> {
        self.graph
            .vertex_by_name(name)
            .ok_or_else(|| GraphError::UnknownVertex {
                name: name.to_owned(),
            })
    }

    fn push_neighbor(&mut self, from: VertexId, to: VertexId, weight: Weight) {
        if let Some(vertex) = self.graph.vertices.get_mut(from.index()) {
            vertex.neighbors.push(Neighbor { vertex: to, weight });
        }
    }
}
