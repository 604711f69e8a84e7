//! Small helpers shared across CLI tests.

use std::fs;
use std::io;
use std::path::PathBuf;

use tempfile::TempDir;

use super::commands::run_command;
use super::{CliError, MergeStrategyArg, RunCommand};

/// Square with two diagonals; its minimum spanning tree weighs 4.
pub(super) const SQUARE: &str = "\
# square with diagonals
4
A
B
C
D

A B 1
B C 2
C D 1
A D 4
B D 3
";

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn create_graph_file(dir: &TempDir, name: &str, contents: &str) -> io::Result<PathBuf> {
    let path = dir.path().join(name);
    fs::write(&path, contents)?;
    Ok(path)
}

/// Returns a `run` command for `path` with every option at its default.
pub(super) fn default_command(path: PathBuf) -> RunCommand {
    RunCommand {
        path,
        merge_strategy: MergeStrategyArg::Reinsert,
        path_compression: false,
        verify_invariants: false,
        show_trees: false,
        name: None,
    }
}

pub(super) fn run_command_expecting_error(cmd: RunCommand, panic_msg: &str) -> CliError {
    match run_command(cmd) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}
