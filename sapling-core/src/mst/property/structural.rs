//! Structural invariants of a produced spanning tree.
//!
//! For every connected fixture the arc list must:
//!
//! - hold exactly `n - 1` arcs,
//! - contain no self-loop,
//! - be acyclic and therefore span every vertex,
//! - use only edges present in the input with their original weight.

use std::collections::HashMap;

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{EngineBuilder, arc::Arc, graph::Weight};

use super::helpers::{count_components, find_root};
use super::types::MstFixture;

/// Runs the structural invariant property for the given fixture.
///
/// Disconnected fixtures are skipped; the equivalence property covers them.
pub(super) fn run_structural_invariants_property(fixture: &MstFixture) -> TestCaseResult {
    if count_components(fixture.vertex_count, &fixture.edges) != 1 {
        return Ok(());
    }
    let graph = fixture.graph();
    let tree = EngineBuilder::new().build().run(&graph).map_err(|err| {
        TestCaseError::fail(format!("engine failed: {err} ({})", fixture.describe()))
    })?;
    let arcs = tree.arcs();

    validate_arc_count(fixture.vertex_count, arcs.len())?;
    validate_no_self_loops(arcs)?;
    validate_acyclic(fixture.vertex_count, arcs)?;
    validate_input_edges(fixture, arcs)?;
    Ok(())
}

fn validate_arc_count(vertex_count: usize, actual: usize) -> TestCaseResult {
    let expected = vertex_count.saturating_sub(1);
    if actual != expected {
        return Err(TestCaseError::fail(format!(
            "arc count {actual}, expected n - 1 = {expected}",
        )));
    }
    Ok(())
}

fn validate_no_self_loops(arcs: &[Arc]) -> TestCaseResult {
    for (i, arc) in arcs.iter().enumerate() {
        if arc.near() == arc.far() {
            return Err(TestCaseError::fail(format!(
                "arc {i}: self-loop on vertex {}",
                arc.near(),
            )));
        }
    }
    Ok(())
}

/// `n - 1` acyclic arcs on `n` vertices always span the graph, so this also
/// covers connectivity.
fn validate_acyclic(vertex_count: usize, arcs: &[Arc]) -> TestCaseResult {
    let mut parent: Vec<usize> = (0..vertex_count).collect();
    for (i, arc) in arcs.iter().enumerate() {
        let ra = find_root(&mut parent, arc.near().index());
        let rb = find_root(&mut parent, arc.far().index());
        if ra == rb {
            return Err(TestCaseError::fail(format!(
                "arc {i}: ({}, {}) closes a cycle",
                arc.near(),
                arc.far(),
            )));
        }
        parent[rb] = ra;
    }
    Ok(())
}

fn validate_input_edges(fixture: &MstFixture, arcs: &[Arc]) -> TestCaseResult {
    let mut available: HashMap<(usize, usize, Weight), usize> = HashMap::new();
    for &(left, right, weight) in &fixture.edges {
        *available
            .entry((left.min(right), left.max(right), weight))
            .or_default() += 1;
    }
    for (i, arc) in arcs.iter().enumerate() {
        let (near, far) = (arc.near().index(), arc.far().index());
        let key = (near.min(far), near.max(far), arc.weight());
        match available.get_mut(&key) {
            Some(count) if *count > 0 => *count -= 1,
            _ => {
                return Err(TestCaseError::fail(format!(
                    "arc {i}: ({near}, {far}, {}) is not an unused input edge ({})",
                    arc.weight(),
                    fixture.describe(),
                )));
            }
        }
    }
    Ok(())
}
