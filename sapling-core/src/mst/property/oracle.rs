//! Reference oracles for MST property verification.
//!
//! Provides a sequential Kruskal implementation and an exhaustive search over
//! edge subsets. Both work on index triples rather than [`crate::Graph`], so a
//! defect in the graph model cannot hide a defect in the merge loop.

use crate::graph::Weight;

use super::helpers::find_root;

/// Result of the sequential Kruskal oracle.
#[derive(Clone, Debug)]
pub(super) struct SequentialMstResult {
    /// Total weight of the minimum spanning forest.
    pub total_weight: u64,
    /// Number of edges in the forest.
    pub edge_count: usize,
    /// Number of connected components after construction.
    pub component_count: usize,
}

impl SequentialMstResult {
    /// Returns `true` when the forest is a single spanning tree.
    pub(super) fn is_tree(&self) -> bool {
        self.component_count <= 1
    }
}

/// Computes a minimum spanning forest using sequential Kruskal.
///
/// Self-loops are skipped. Out-of-range endpoints are never produced by the
/// strategies, so they are not filtered here.
pub(super) fn sequential_kruskal(
    vertex_count: usize,
    edges: &[(usize, usize, Weight)],
) -> SequentialMstResult {
    let mut sorted: Vec<(usize, usize, Weight)> = edges
        .iter()
        .copied()
        .filter(|&(left, right, _)| left != right)
        .collect();
    sorted.sort_by_key(|&(left, right, weight)| (weight, left.min(right), left.max(right)));

    let mut parent: Vec<usize> = (0..vertex_count).collect();
    let mut components = vertex_count;
    let mut total_weight = 0_u64;
    let mut edge_count = 0;

    for (left, right, weight) in sorted {
        let ra = find_root(&mut parent, left);
        let rb = find_root(&mut parent, right);
        if ra != rb {
            parent[rb] = ra;
            total_weight += u64::from(weight);
            edge_count += 1;
            components -= 1;
        }
    }

    SequentialMstResult {
        total_weight,
        edge_count,
        component_count: components,
    }
}

/// Finds the minimum spanning tree weight by trying every subset of
/// `vertex_count - 1` edges.
///
/// Returns `None` when no subset spans the graph. Only suitable for graphs
/// with a handful of edges.
pub(super) fn brute_force_minimum(
    vertex_count: usize,
    edges: &[(usize, usize, Weight)],
) -> Option<u64> {
    if vertex_count <= 1 {
        return Some(0);
    }
    let needed = vertex_count - 1;
    let mut best: Option<u64> = None;
    let mut chosen = Vec::with_capacity(needed);
    search(vertex_count, edges, 0, needed, &mut chosen, &mut best);
    best
}

fn search(
    vertex_count: usize,
    edges: &[(usize, usize, Weight)],
    start: usize,
    needed: usize,
    chosen: &mut Vec<usize>,
    best: &mut Option<u64>,
) {
    if chosen.len() == needed {
        if let Some(weight) = spanning_weight(vertex_count, edges, chosen) {
            *best = Some(best.map_or(weight, |current| current.min(weight)));
        }
        return;
    }
    let remaining = needed - chosen.len();
    for index in start..edges.len() {
        if edges.len() - index < remaining {
            break;
        }
        chosen.push(index);
        search(vertex_count, edges, index + 1, needed, chosen, best);
        chosen.pop();
    }
}

/// Returns the subset's weight when it forms a spanning tree.
fn spanning_weight(
    vertex_count: usize,
    edges: &[(usize, usize, Weight)],
    chosen: &[usize],
) -> Option<u64> {
    let mut parent: Vec<usize> = (0..vertex_count).collect();
    let mut total = 0_u64;
    for &index in chosen {
        let (left, right, weight) = edges[index];
        let ra = find_root(&mut parent, left);
        let rb = find_root(&mut parent, right);
        if ra == rb {
            return None;
        }
        parent[rb] = ra;
        total += u64::from(weight);
    }
    Some(total)
}
