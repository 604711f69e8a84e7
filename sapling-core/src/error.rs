//! Error types for the sapling core library.
//!
//! Every public error enum carries a stable machine-readable code so callers
//! can log or match on failures without parsing messages.

use std::fmt;

use thiserror::Error;

use crate::graph::VertexId;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error produced by [`crate::MinHeap`] operations.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum HeapError {
    /// `delete_min` was called on a heap with no items.
    #[error("cannot delete the minimum of an empty heap")]
    Empty,
}

define_error_codes! {
    /// Stable codes describing [`HeapError`] variants.
    enum HeapErrorCode for HeapError {
        /// `delete_min` was called on a heap with no items.
        Empty => Empty => "HEAP_EMPTY",
    }
}

/// Error produced by [`crate::PartialTreeQueue`] removals.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum QueueError {
    /// `remove_front` was called on an empty queue.
    #[error("cannot remove from an empty partial tree queue")]
    Empty,
    /// No live tree owns the component of the requested vertex.
    #[error("no partial tree owns vertex {vertex} (component root {root})")]
    TreeNotFound {
        /// Vertex whose owning tree was requested.
        vertex: VertexId,
        /// Component root resolved for `vertex`.
        root: VertexId,
    },
}

define_error_codes! {
    /// Stable codes describing [`QueueError`] variants.
    enum QueueErrorCode for QueueError {
        /// `remove_front` was called on an empty queue.
        Empty => Empty => "QUEUE_EMPTY",
        /// No live tree owns the component of the requested vertex.
        TreeNotFound => TreeNotFound { .. } => "QUEUE_TREE_NOT_FOUND",
    }
}

/// Error produced while building or querying a [`crate::Graph`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// A vertex with the same name was already added.
    #[error("vertex `{name}` is already defined")]
    DuplicateVertex {
        /// Name supplied twice.
        name: String,
    },
    /// An edge referenced a vertex name that was never added.
    #[error("edge references unknown vertex `{name}`")]
    UnknownVertex {
        /// The unresolved vertex name.
        name: String,
    },
    /// A vertex id did not belong to the graph.
    #[error("vertex {vertex} is out of range for a graph of {vertex_count} vertices")]
    InvalidVertexId {
        /// The offending id.
        vertex: VertexId,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// A vertex with the same name was already added.
        DuplicateVertex => DuplicateVertex { .. } => "GRAPH_DUPLICATE_VERTEX",
        /// An edge referenced a vertex name that was never added.
        UnknownVertex => UnknownVertex { .. } => "GRAPH_UNKNOWN_VERTEX",
        /// A vertex id did not belong to the graph.
        InvalidVertexId => InvalidVertexId { .. } => "GRAPH_INVALID_VERTEX_ID",
    }
}

/// Error returned when a minimum spanning tree cannot be produced.
///
/// Every variant is fatal for the run: the driver aborts and no partial
/// forest is returned.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum MstError {
    /// The queue handed to the driver held no partial trees.
    #[error("cannot compute an MST for an empty graph")]
    EmptyGraph,
    /// A partial tree ran out of boundary arcs while other trees remained.
    #[error(
        "graph is not connected: component rooted at `{root_name}` ({root}) has no arc to the \
         {remaining_trees} other remaining component(s)"
    )]
    Disconnected {
        /// Root of the component whose heap was exhausted.
        root: VertexId,
        /// Name of that root vertex.
        root_name: String,
        /// Number of other partial trees still queued.
        remaining_trees: usize,
    },
    /// `remove_front` found no tree although the driver was still running.
    #[error("partial tree queue emptied while the driver was running")]
    EmptyQueue,
    /// An accepted arc reached a vertex no queued tree owns.
    #[error(
        "no partial tree owns vertex `{vertex_name}` ({vertex}) with component root {root}"
    )]
    TreeNotFound {
        /// Far endpoint of the accepted arc.
        vertex: VertexId,
        /// Name of the far endpoint.
        vertex_name: String,
        /// Component root resolved for `vertex`.
        root: VertexId,
    },
    /// Component bookkeeping disagreed with the queued trees.
    #[error("MST invariant violated: {invariant} (vertex {vertex})")]
    InvariantViolation {
        /// Name of the violated invariant to assist debugging.
        invariant: &'static str,
        /// The vertex at which the violation was detected.
        vertex: VertexId,
    },
}

define_error_codes! {
    /// Stable codes describing [`MstError`] variants.
    enum MstErrorCode for MstError {
        /// The queue handed to the driver held no partial trees.
        EmptyGraph => EmptyGraph => "MST_EMPTY_GRAPH",
        /// A partial tree ran out of boundary arcs while other trees remained.
        Disconnected => Disconnected { .. } => "MST_DISCONNECTED",
        /// `remove_front` found no tree although the driver was still running.
        EmptyQueue => EmptyQueue => "MST_EMPTY_QUEUE",
        /// An accepted arc reached a vertex no queued tree owns.
        TreeNotFound => TreeNotFound { .. } => "MST_TREE_NOT_FOUND",
        /// Component bookkeeping disagreed with the queued trees.
        InvariantViolation => InvariantViolation { .. } => "MST_INVARIANT_VIOLATION",
    }
}

impl MstError {
    /// Returns `true` when the error reflects malformed input rather than a
    /// broken internal invariant.
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(self, Self::EmptyGraph | Self::Disconnected { .. })
    }
}
