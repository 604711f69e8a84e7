//! Sapling core library.
//!
//! Builds minimum spanning trees by repeatedly merging partial trees. Every
//! vertex starts as its own [`PartialTree`] holding a min-heap of its boundary
//! [`Arc`]s. The driver dequeues a tree, pops arcs until one leaves the tree's
//! component, accepts it, merges the tree on the far end and requeues the
//! result until a single tree remains.
//!
//! Arcs whose far endpoint has been absorbed into the popping tree are left in
//! the heap and discarded when they surface.
//!
//! # Examples
//! ```
//! use sapling_core::{GraphBuilder, execute, initialize};
//!
//! let mut builder = GraphBuilder::new();
//! let a = builder.add_vertex("A")?;
//! let b = builder.add_vertex("B")?;
//! let c = builder.add_vertex("C")?;
//! builder.add_edge(a, b, 3)?;
//! builder.add_edge(b, c, 1)?;
//! builder.add_edge(a, c, 2)?;
//! let graph = builder.build();
//!
//! let arcs = execute(initialize(&graph))?;
//! assert_eq!(arcs.len(), 2);
//! assert_eq!(arcs.iter().map(|arc| u64::from(arc.weight())).sum::<u64>(), 3);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Metrics
//!
//! When the `metrics` feature is enabled the driver emits:
//!
//! - `mst_merges` (counter)
//! - `mst_stale_arcs_discarded` (counter)
//! - `mst_heap_size_at_merge` (histogram, combined heap length)
#![cfg_attr(docsrs, feature(doc_cfg))]

mod arc;
mod builder;
mod engine;
mod error;
mod graph;
mod heap;
mod mst;

#[cfg(test)]
mod test_utils;

pub use crate::{
    arc::{Arc, ArcDisplay},
    builder::EngineBuilder,
    engine::Engine,
    error::{
        GraphError, GraphErrorCode, HeapError, HeapErrorCode, MstError, MstErrorCode, QueueError,
        QueueErrorCode,
    },
    graph::{Graph, GraphBuilder, Neighbor, Vertex, VertexId, Weight},
    heap::{HeapMergeStrategy, MinHeap, Weighted},
    mst::{PartialTree, PartialTreeQueue, RunStats, SpanningTree, TreeDisplay, execute, initialize},
};
