//! Partition invariant: after every merge each vertex belongs to exactly one
//! queued tree, and the tree's root is its component root.
//!
//! The engine variant enables per-merge partition checks, so any drift in
//! the component bookkeeping surfaces as `MstError::InvariantViolation`.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::error::MstError;

use super::types::{EngineVariant, MstFixture};

/// Runs the fixture through `variant` and fails on any invariant violation.
pub(super) fn run_partition_property(fixture: &MstFixture, variant: EngineVariant) -> TestCaseResult {
    let graph = fixture.graph();
    let engine = variant.engine();
    let queue = engine.initialize(&graph);
    queue.check_partition().map_err(|err| {
        TestCaseError::fail(format!("initial queue: {err} ({})", fixture.describe()))
    })?;

    match engine.execute(queue) {
        Ok(tree) => {
            let stats = tree.stats();
            if stats.initial_trees() != fixture.vertex_count {
                return Err(TestCaseError::fail(format!(
                    "initial trees {}, expected {} ({})",
                    stats.initial_trees(),
                    fixture.vertex_count,
                    fixture.describe(),
                )));
            }
            if stats.iterations() != fixture.vertex_count - 1 {
                return Err(TestCaseError::fail(format!(
                    "iterations {}, expected {} ({})",
                    stats.iterations(),
                    fixture.vertex_count - 1,
                    fixture.describe(),
                )));
            }
            Ok(())
        }
        Err(MstError::Disconnected { .. }) => Ok(()),
        Err(err) => Err(TestCaseError::fail(format!(
            "{err} [{}] ({variant:?}, {})",
            err.code(),
            fixture.describe(),
        ))),
    }
}
