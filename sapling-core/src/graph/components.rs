//! Parent-reference component tracking.
//!
//! Each vertex stores a parent id; following parents terminates at a vertex
//! that is its own parent, the root of the component. Union happens only
//! through [`Graph::link`], called when one partial tree absorbs another.
//!
//! Ids that do not belong to the graph are treated as singleton components.

use super::{Graph, VertexId};

impl Graph {
    fn parent_of(&self, vertex: VertexId) -> VertexId {
        self.vertices
            .get(vertex.index())
            .map_or(vertex, |entry| entry.parent.get())
    }

    fn set_parent(&self, vertex: VertexId, parent: VertexId) {
        if let Some(entry) = self.vertices.get(vertex.index()) {
            entry.parent.set(parent);
        }
    }

    /// Returns the root of the component containing `vertex`.
    ///
    /// Walks parent references without modifying them.
    #[must_use]
    pub fn find(&self, vertex: VertexId) -> VertexId {
        let mut current = vertex;
        loop {
            let parent = self.parent_of(current);
            if parent == current {
                return current;
            }
            current = parent;
        }
    }

    /// Returns the root of the component containing `vertex`, pointing every
    /// vertex on the walked path directly at the root.
    ///
    /// The answer is always identical to [`Graph::find`].
    pub fn find_compressing(&self, vertex: VertexId) -> VertexId {
        let root = self.find(vertex);
        let mut current = vertex;
        while current != root {
            let parent = self.parent_of(current);
            self.set_parent(current, root);
            current = parent;
        }
        root
    }

    /// Returns `true` when both vertices share a component root.
    #[must_use]
    pub fn same_component(&self, left: VertexId, right: VertexId) -> bool {
        self.find(left) == self.find(right)
    }

    /// Makes every vertex the root of its own singleton component.
    pub fn reset_components(&self) {
        for id in self.vertex_ids() {
            self.set_parent(id, id);
        }
    }

    /// Re-parents the root `absorbed` under the root `survivor`.
    pub(crate) fn link(&self, absorbed: VertexId, survivor: VertexId) {
        debug_assert_eq!(self.parent_of(absorbed), absorbed, "absorbed must be a root");
        self.set_parent(absorbed, survivor);
    }
}
