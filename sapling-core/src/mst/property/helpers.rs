//! Shared helper functions for MST property-based tests.

use crate::{arc::Arc, graph::Weight};

/// Path-compressing find for union-find verification.
pub(super) fn find_root(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}

/// Sums arc weights as `u64`.
pub(super) fn total_weight(arcs: &[Arc]) -> u64 {
    arcs.iter().map(|arc| u64::from(arc.weight())).sum()
}

/// Counts connected components of an index-based edge list.
pub(super) fn count_components(vertex_count: usize, edges: &[(usize, usize, Weight)]) -> usize {
    let mut parent: Vec<usize> = (0..vertex_count).collect();
    let mut components = vertex_count;
    for &(left, right, _) in edges {
        let ra = find_root(&mut parent, left);
        let rb = find_root(&mut parent, right);
        if ra != rb {
            parent[rb] = ra;
            components -= 1;
        }
    }
    components
}
