//! Property-based tests for the partial-tree merge driver.
//!
//! Verifies the driver against a sequential Kruskal oracle and a brute-force
//! oracle on tiny graphs, validates structural invariants of the returned
//! arcs (edge count, acyclicity, spanning), and re-checks the partition of
//! vertices across queued trees after every merge.

mod equivalence;
mod helpers;
mod oracle;
mod partition;
mod structural;
