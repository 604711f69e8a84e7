//! Shared test utilities for `sapling-core`.

use proptest::test_runner::Config as ProptestConfig;
use sapling_test_support::ci::property_test_profile::ProptestRunProfile;

use crate::graph::{Graph, GraphBuilder, VertexId, Weight};

/// Builds a standard proptest configuration from the shared CI profile.
///
/// This keeps property suites aligned on the same `PROPTEST_CASES` and
/// `SAPLING_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Builds a graph with vertices `v0..v{n-1}` and the given undirected edges.
///
/// # Panics
/// Panics when an edge references a vertex index `>= vertex_count`.
#[must_use]
pub(crate) fn indexed_graph(vertex_count: usize, edges: &[(usize, usize, Weight)]) -> Graph {
    let mut builder = GraphBuilder::with_capacity(vertex_count);
    for index in 0..vertex_count {
        builder
            .add_vertex(format!("v{index}"))
            .expect("generated names are unique");
    }
    for &(left, right, weight) in edges {
        builder
            .add_edge(VertexId::new(left), VertexId::new(right), weight)
            .expect("edge endpoints must be in range");
    }
    builder.build()
}

/// Builds a graph from named vertices and named edges.
///
/// # Panics
/// Panics on duplicate or unknown names.
#[must_use]
pub(crate) fn named_graph(names: &[&str], edges: &[(&str, &str, Weight)]) -> Graph {
    let mut builder = GraphBuilder::with_capacity(names.len());
    for name in names {
        builder.add_vertex(*name).expect("names must be unique");
    }
    for &(left, right, weight) in edges {
        builder
            .add_edge_by_name(left, right, weight)
            .expect("edge endpoints must exist");
    }
    builder.build()
}
