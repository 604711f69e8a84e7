use sapling_core::{Arc, Graph, GraphBuilder, Weight};

/// Builds a graph from named vertices and named undirected edges.
#[must_use]
pub fn graph(names: &[&str], edges: &[(&str, &str, Weight)]) -> Graph {
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

/// Square with two diagonals used throughout the suite; its minimum
/// spanning tree weighs 4.
#[must_use]
pub fn square() -> Graph {
    graph(
        &["A", "B", "C", "D"],
        &[
            ("A", "B", 1),
            ("B", "C", 2),
            ("C", "D", 1),
            ("A", "D", 4),
            ("B", "D", 3),
        ],
    )
}

/// Renders arcs as sorted `(low, high, weight)` name triples so trees can be
/// compared regardless of arc orientation or acceptance order.
#[must_use]
pub fn edge_set(graph: &Graph, arcs: &[Arc]) -> Vec<(String, String, Weight)> {
    let mut edges: Vec<_> = arcs
        .iter()
        .map(|arc| {
            let near = graph.name(arc.near()).to_owned();
            let far = graph.name(arc.far()).to_owned();
            if near <= far {
                (near, far, arc.weight())
            } else {
                (far, near, arc.weight())
            }
        })
        .collect();
    edges.sort();
    edges
}
