//! Oracle equivalence: the merge loop reaches the same total weight as
//! sequential Kruskal, and rejects exactly the inputs Kruskal leaves as a
//! forest.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{EngineBuilder, error::MstError};

use super::helpers::total_weight;
use super::oracle::sequential_kruskal;
use super::types::{EngineVariant, MstFixture};

/// Runs the oracle equivalence property with the default engine.
pub(super) fn run_oracle_equivalence_property(fixture: &MstFixture) -> TestCaseResult {
    check_against_oracle(fixture, &EngineBuilder::new().build())
}

/// Runs the oracle equivalence property with a sampled engine variant.
pub(super) fn run_variant_equivalence_property(
    fixture: &MstFixture,
    variant: EngineVariant,
) -> TestCaseResult {
    check_against_oracle(fixture, &variant.engine())
}

fn check_against_oracle(fixture: &MstFixture, engine: &crate::Engine) -> TestCaseResult {
    let graph = fixture.graph();
    let oracle = sequential_kruskal(fixture.vertex_count, &fixture.edges);

    match engine.run(&graph) {
        Ok(tree) => {
            if !oracle.is_tree() {
                return Err(TestCaseError::fail(format!(
                    "engine produced a tree for input with {} components ({})",
                    oracle.component_count,
                    fixture.describe(),
                )));
            }
            let weight = total_weight(tree.arcs());
            if weight != oracle.total_weight || tree.total_weight() != weight {
                return Err(TestCaseError::fail(format!(
                    "total weight mismatch: engine={weight} (reported {}), oracle={} ({})",
                    tree.total_weight(),
                    oracle.total_weight,
                    fixture.describe(),
                )));
            }
            if tree.arcs().len() != oracle.edge_count {
                return Err(TestCaseError::fail(format!(
                    "arc count mismatch: engine={}, oracle={} ({})",
                    tree.arcs().len(),
                    oracle.edge_count,
                    fixture.describe(),
                )));
            }
            Ok(())
        }
        Err(MstError::Disconnected {
            remaining_trees, ..
        }) => {
            if oracle.is_tree() {
                return Err(TestCaseError::fail(format!(
                    "engine reported a disconnected graph for connected input ({})",
                    fixture.describe(),
                )));
            }
            if remaining_trees == 0 || remaining_trees >= fixture.vertex_count {
                return Err(TestCaseError::fail(format!(
                    "implausible remaining tree count {remaining_trees} ({})",
                    fixture.describe(),
                )));
            }
            Ok(())
        }
        Err(err) => Err(TestCaseError::fail(format!(
            "engine failed: {err} ({})",
            fixture.describe(),
        ))),
    }
}
