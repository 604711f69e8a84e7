//! Command implementations and argument parsing for the sapling CLI.

use std::fmt;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use sapling_core::{EngineBuilder, HeapMergeStrategy, MstError, RunStats, Weight};
use sapling_providers_text::{GraphFile, GraphFileError};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "sapling",
    about = "Build minimum spanning trees by merging partial trees."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Compute the minimum spanning tree of a graph file.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Path to a graph file: vertex count, vertex names, then `a b weight`
    /// edge lines.
    pub path: PathBuf,

    /// How the heaps of two merging trees are combined.
    #[arg(long, value_enum, default_value_t = MergeStrategyArg::Reinsert)]
    pub merge_strategy: MergeStrategyArg,

    /// Compress component paths during lookups.
    #[arg(long)]
    pub path_compression: bool,

    /// Re-check the vertex partition after every merge.
    #[arg(long)]
    pub verify_invariants: bool,

    /// Print the initial singleton trees before the result.
    #[arg(long)]
    pub show_trees: bool,

    /// Override name for the data source (defaults to the file name).
    #[arg(long)]
    pub name: Option<String>,
}

/// Heap merge strategies selectable from the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum MergeStrategyArg {
    /// Re-insert the arcs of the smaller heap into the larger one.
    #[default]
    Reinsert,
    /// Append the absorbed heap and restore heap order once.
    Concatenate,
}

impl From<MergeStrategyArg> for HeapMergeStrategy {
    fn from(value: MergeStrategyArg) -> Self {
        match value {
            MergeStrategyArg::Reinsert => Self::Reinsert,
            MergeStrategyArg::Concatenate => Self::Concatenate,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failed while opening the graph file.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The graph file could not be parsed.
    #[error(transparent)]
    Load(#[from] GraphFileError),
    /// The engine could not build a spanning tree.
    #[error(transparent)]
    Mst(#[from] MstError),
}

impl CliError {
    /// Returns the stable code of the underlying error, if it has one.
    #[must_use]
    pub fn code(&self) -> Option<&'static str> {
        match self {
            Self::Io { .. } => None,
            Self::Load(err) => Some(err.code()),
            Self::Mst(err) => Some(err.code().as_str()),
        }
    }
}

/// An accepted arc with its endpoint names resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArcSummary {
    /// Endpoint in the tree that popped the arc.
    pub near: String,
    /// Endpoint in the absorbed tree.
    pub far: String,
    /// Arc weight.
    pub weight: Weight,
}

impl fmt::Display for ArcSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -- {} ({})", self.near, self.far, self.weight)
    }
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Name of the loaded data source.
    pub data_source: String,
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Rendered singleton trees, when `--show-trees` was given.
    pub initial_trees: Option<Vec<String>>,
    /// Accepted arcs in acceptance order.
    pub arcs: Vec<ArcSummary>,
    /// Sum of accepted arc weights.
    pub total_weight: u64,
    /// Counters collected by the merge loop.
    pub stats: RunStats,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when loading the graph or building the tree fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use sapling_cli::cli::{Cli, Command, MergeStrategyArg, RunCommand, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "3\nA\nB\nC\nA B 2\nB C 1\nA C 5\n")?;
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         path: file.path().to_path_buf(),
///         merge_strategy: MergeStrategyArg::Reinsert,
///         path_compression: false,
///         verify_invariants: false,
///         show_trees: false,
///         name: None,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.arcs.len(), 2);
/// assert_eq!(summary.total_weight, 3);
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Run(run) => {
            Span::current().record("command", field::display("run"));
            run_command(run)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(
        path = field::Empty,
        merge_strategy = field::Empty,
        path_compression = command.path_compression,
        verify_invariants = command.verify_invariants,
    ),
)]
pub(super) fn run_command(command: RunCommand) -> Result<ExecutionSummary, CliError> {
    let RunCommand {
        path,
        merge_strategy,
        path_compression,
        verify_invariants,
        show_trees,
        name,
    } = command;
    let strategy = HeapMergeStrategy::from(merge_strategy);
    let span = Span::current();
    span.record("path", field::display(path.display()));
    span.record("merge_strategy", field::display(strategy.as_str()));

    let engine = EngineBuilder::new()
        .with_merge_strategy(strategy)
        .with_path_compression(path_compression)
        .with_invariant_checks(verify_invariants)
        .build();

    let chosen_name = derive_data_source_name(&path, name.as_deref());
    let reader = open_graph_reader(&path)?;
    let file = GraphFile::try_from_reader(chosen_name, reader)?;
    let graph = file.graph();

    let queue = engine.initialize(graph);
    let initial_trees = show_trees.then(|| {
        queue
            .iter()
            .map(|tree| tree.display(graph).to_string())
            .collect()
    });
    let tree = engine.execute(queue)?;

    let arcs = tree
        .arcs()
        .iter()
        .map(|arc| ArcSummary {
            near: graph.name(arc.near()).to_owned(),
            far: graph.name(arc.far()).to_owned(),
            weight: arc.weight(),
        })
        .collect();
    let summary = ExecutionSummary {
        data_source: file.name().to_owned(),
        vertex_count: graph.len(),
        initial_trees,
        arcs,
        total_weight: tree.total_weight(),
        stats: tree.stats(),
    };

    info!(
        data_source = summary.data_source.as_str(),
        arcs = summary.arcs.len(),
        total_weight = summary.total_weight,
        "command completed"
    );
    Ok(summary)
}

#[instrument(name = "cli.open_graph_reader", err, fields(path = field::Empty))]
pub(super) fn open_graph_reader(path: &Path) -> Result<BufReader<File>, CliError> {
    Span::current().record("path", field::display(path.display()));
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

pub(super) fn derive_data_source_name(path: &Path, override_name: Option<&str>) -> String {
    if let Some(name) = override_name {
        return name.to_owned();
    }

    path.file_stem()
        .and_then(|value| value.to_str())
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| "graph".to_owned())
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use sapling_cli::cli::{ArcSummary, ExecutionSummary, render_report};
/// # use sapling_core::RunStats;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = ExecutionSummary {
///     data_source: "pair".into(),
///     vertex_count: 2,
///     initial_trees: None,
///     arcs: vec![ArcSummary { near: "A".into(), far: "B".into(), weight: 7 }],
///     total_weight: 7,
///     stats: RunStats::default(),
/// };
/// let mut buffer = Vec::new();
/// render_report(&summary, &mut buffer)?;
/// let text = String::from_utf8(buffer)?;
/// assert!(text.contains("A -- B (7)"));
/// assert!(text.ends_with("total weight: 7\n"));
/// # Ok(())
/// # }
/// ```
pub fn render_report(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "data source: {}", summary.data_source)?;
    writeln!(writer, "vertices: {}", summary.vertex_count)?;
    if let Some(trees) = &summary.initial_trees {
        writeln!(writer, "initial trees:")?;
        for tree in trees {
            writeln!(writer, "  {tree}")?;
        }
    }
    writeln!(writer, "arcs:")?;
    for arc in &summary.arcs {
        writeln!(writer, "  {arc}")?;
    }
    writeln!(writer, "total weight: {}", summary.total_weight)?;
    Ok(())
}
