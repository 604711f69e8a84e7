//! Queue of live partial trees.
//!
//! Trees are processed front to back; a merged tree re-enters at the back.
//! Lookup by vertex scans the queue comparing tree roots against the vertex's
//! component root.

use std::collections::{HashSet, VecDeque};

use crate::{
    error::{MstError, QueueError},
    graph::{Graph, VertexId},
};

use super::partial_tree::PartialTree;

/// Double-ended queue of the partial trees that are still live.
///
/// The queue borrows the graph whose vertices the trees partition, so
/// component lookups always resolve against the same parent references the
/// trees mutate on merge.
#[derive(Debug)]
pub struct PartialTreeQueue<'g> {
    graph: &'g Graph,
    trees: VecDeque<PartialTree>,
    path_compression: bool,
}

impl<'g> PartialTreeQueue<'g> {
    /// Creates an empty queue over `graph`.
    #[must_use]
    pub fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            trees: VecDeque::with_capacity(graph.len()),
            path_compression: false,
        }
    }

    /// Enables or disables path compression on component lookups.
    ///
    /// Compression only shortens later lookups; it never changes which root is
    /// returned.
    #[must_use]
    pub fn with_path_compression(mut self, enabled: bool) -> Self {
        self.path_compression = enabled;
        self
    }

    /// Returns the graph whose vertices the queued trees partition.
    #[must_use]
    #[rustfmt::skip]
    pub fn graph(&self) -> &'g Graph { self.graph }

    /// Returns `true` when lookups compress paths.
    #[must_use]
    #[rustfmt::skip]
    pub fn path_compression(&self) -> bool { self.path_compression }

    /// Returns the number of live trees.
    #[must_use]
    pub fn len(&self) -> usize {
        self.trees.len()
    }

    /// Returns `true` when no trees are queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }

    /// Appends `tree` at the back of the queue.
    pub fn append(&mut self, tree: PartialTree) {
        self.trees.push_back(tree);
    }

    /// Removes and returns the tree at the front of the queue.
    ///
    /// # Errors
    /// Returns [`QueueError::Empty`] when the queue holds no trees.
    pub fn remove_front(&mut self) -> Result<PartialTree, QueueError> {
        self.trees.pop_front().ok_or(QueueError::Empty)
    }

    /// Removes and returns the tree owning the component of `vertex`.
    ///
    /// # Errors
    /// Returns [`QueueError::TreeNotFound`] when no queued tree's root matches
    /// the component root of `vertex`.
    pub fn remove_tree_containing(&mut self, vertex: VertexId) -> Result<PartialTree, QueueError> {
        let root = self.find(vertex);
        let position = self
            .trees
            .iter()
            .position(|tree| tree.root() == root)
            .ok_or(QueueError::TreeNotFound { vertex, root })?;
        self.trees
            .remove(position)
            .ok_or(QueueError::TreeNotFound { vertex, root })
    }

    /// Iterates over the live trees from front to back.
    ///
    /// The borrow prevents the queue from being modified during iteration.
    pub fn iter(&self) -> std::collections::vec_deque::Iter<'_, PartialTree> {
        self.trees.iter()
    }

    /// Resolves the component root of `vertex`.
    pub fn find(&self, vertex: VertexId) -> VertexId {
        if self.path_compression {
            self.graph.find_compressing(vertex)
        } else {
            self.graph.find(vertex)
        }
    }

    /// Verifies that the queued trees partition the graph's vertices.
    ///
    /// Every tree root must be a component root, no two trees may share a root,
    /// every vertex must resolve to exactly one queued root, and the trees'
    /// vertex counts must add up to the graph size.
    ///
    /// # Errors
    /// Returns [`MstError::InvariantViolation`] naming the first breach found.
    pub fn check_partition(&self) -> Result<(), MstError> {
        let mut roots = HashSet::with_capacity(self.trees.len());
        let mut claimed = 0_usize;
        for tree in &self.trees {
            let root = tree.root();
            if self.graph.find(root) != root {
                return Err(MstError::InvariantViolation {
                    invariant: "tree root must be its own component root",
                    vertex: root,
                });
            }
            if !roots.insert(root) {
                return Err(MstError::InvariantViolation {
                    invariant: "component owned by more than one tree",
                    vertex: root,
                });
            }
            claimed += tree.vertex_count();
        }

        for vertex in self.graph.vertex_ids() {
            if !roots.contains(&self.graph.find(vertex)) {
                return Err(MstError::InvariantViolation {
                    invariant: "vertex not owned by any queued tree",
                    vertex,
                });
            }
        }

        if claimed != self.graph.len() {
            let vertex = self
                .trees
                .front()
                .map_or(VertexId::new(0), PartialTree::root);
            return Err(MstError::InvariantViolation {
                invariant: "tree vertex counts must sum to the graph size",
                vertex,
            });
        }
        Ok(())
    }
}

impl<'q> IntoIterator for &'q PartialTreeQueue<'_> {
    type Item = &'q PartialTree;
    type IntoIter = std::collections::vec_deque::Iter<'q, PartialTree>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
