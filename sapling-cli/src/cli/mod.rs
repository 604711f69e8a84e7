//! Command-line interface for building minimum spanning trees.
//!
//! The `run` command loads a graph file, runs the partial-tree merge engine
//! and reports the accepted arcs with their total weight.

mod commands;

pub use commands::{
    ArcSummary, Cli, CliError, Command, ExecutionSummary, MergeStrategyArg, RunCommand,
    render_report, run_cli,
};

#[cfg(test)]
mod test_helpers;
