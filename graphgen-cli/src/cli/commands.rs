//! Argument parsing and command execution for the graphgen CLI.

use std::ffi::{OsStr, OsString};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use graphgen_core::{
    GeneratedGraph, GraphGenBuilder, GraphGenError, GraphMetadata, NodeLabeler, NoopObserver,
    TracingObserver, output_file_name, write_adjacency_list,
};
use thiserror::Error;
use tracing::{info, instrument};

/// Single-dash spellings accepted for compatibility, with their clap forms.
const LEGACY_FLAGS: [(&str, &str); 2] = [("-suppress", "--suppress"), ("-sparse", "--sparse")];

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "graphgen",
    about = "Generate a random graph with bounded node degree as an adjacency list."
)]
pub struct Cli {
    /// Number of nodes in the graph.
    pub num_nodes: usize,

    /// Largest degree any node may reach.
    pub max_degree: usize,

    /// Description written verbatim to the second line of the file.
    #[arg(allow_hyphen_values = true)]
    pub description: Option<String>,

    /// Suppress per-node construction diagnostics.
    #[arg(long)]
    pub suppress: bool,

    /// Pre-seed degree counters so nodes saturate sooner.
    #[arg(long)]
    pub sparse: bool,

    /// Seed the generator for reproducible output.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Directory the graph file is written to.
    #[arg(long = "output-dir", default_value = ".")]
    pub output_dir: PathBuf,
}

/// Rewrites `-suppress` and `-sparse` to their double-dash forms so clap
/// accepts both spellings in any position. Arguments after `--` are left
/// untouched.
///
/// # Examples
/// ```
/// use graphgen_cli::cli::normalise_legacy_flags;
///
/// let args = normalise_legacy_flags(["graphgen", "10", "3", "-sparse", "demo"]);
/// let rendered: Vec<_> = args.iter().filter_map(|arg| arg.to_str()).collect();
/// assert_eq!(rendered, ["graphgen", "10", "3", "--sparse", "demo"]);
/// ```
pub fn normalise_legacy_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut escaped = false;
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if escaped {
                return arg;
            }
            if arg.as_os_str() == OsStr::new("--") {
                escaped = true;
                return arg;
            }
            LEGACY_FLAGS
                .iter()
                .find(|&&(legacy, _)| arg.as_os_str() == OsStr::new(legacy))
                .map_or(arg, |&(_, modern)| OsString::from(modern))
        })
        .collect()
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Writing the output file failed.
    #[error("failed to write `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Generation was rejected by the core library.
    #[error(transparent)]
    Core(#[from] GraphGenError),
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionSummary {
    /// File the adjacency list was written to.
    pub path: PathBuf,
    /// Number of nodes generated.
    pub node_count: usize,
    /// Number of undirected edges generated.
    pub edge_count: usize,
    /// Degree bound applied during generation.
    pub max_degree: usize,
    /// Whether sparse pre-seeding was enabled.
    pub sparse: bool,
    /// Seed that reproduces the graph.
    pub seed: Option<u64>,
}

/// Generates the graph described by `cli` and writes it to disk.
///
/// Any existing file with the same name is truncated.
///
/// # Errors
/// Returns [`CliError::Core`] when the configuration is rejected, in which
/// case no file is created, and [`CliError::Io`] when writing fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use graphgen_cli::cli::{Cli, run_cli};
/// # use tempfile::TempDir;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let dir = TempDir::new()?;
/// let cli = Cli {
///     num_nodes: 6,
///     max_degree: 3,
///     description: None,
///     suppress: true,
///     sparse: false,
///     seed: Some(1),
///     output_dir: dir.path().to_path_buf(),
/// };
/// let summary = run_cli(cli)?;
/// assert!(summary.path.ends_with("Graph_N6_D3.txt"));
/// assert!(summary.path.exists());
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(
        num_nodes = cli.num_nodes,
        max_degree = cli.max_degree,
        sparse = cli.sparse,
    ),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let Cli {
        num_nodes,
        max_degree,
        description,
        suppress,
        sparse,
        seed,
        output_dir,
    } = cli;

    let mut builder = GraphGenBuilder::new(num_nodes, max_degree).with_sparse(sparse);
    if let Some(value) = seed {
        builder = builder.with_seed(value);
    }
    let generator = builder.build()?;

    let graph = if suppress {
        generator.generate_observed(&mut NoopObserver)
    } else {
        generator.generate_observed(&mut TracingObserver)
    };

    let metadata = GraphMetadata::for_graph(num_nodes, max_degree, description);
    let path = output_dir.join(output_file_name(num_nodes, max_degree, sparse));
    write_graph_file(&path, &graph, &metadata)?;

    let edge_count = graph.adjacency().edge_count();
    info!(path = %path.display(), edges = edge_count, "graph written");
    Ok(ExecutionSummary {
        path,
        node_count: graph.node_count(),
        edge_count,
        max_degree,
        sparse,
        seed: graph.seed(),
    })
}

fn write_graph_file(
    path: &Path,
    graph: &GeneratedGraph,
    metadata: &GraphMetadata,
) -> Result<(), CliError> {
    let io_error = |source| CliError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(io_error)?;
    let mut writer = BufWriter::new(file);
    let labeler = NodeLabeler::for_node_count(graph.node_count());
    write_adjacency_list(&mut writer, graph.adjacency(), &labeler, metadata).map_err(io_error)?;
    writer.flush().map_err(io_error)
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use std::path::PathBuf;
/// # use graphgen_cli::cli::{ExecutionSummary, render_summary};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = ExecutionSummary {
///     path: PathBuf::from("Graph_N4_D2.txt"),
///     node_count: 4,
///     edge_count: 3,
///     max_degree: 2,
///     sparse: false,
///     seed: Some(9),
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert!(String::from_utf8(buffer)?.starts_with("wrote: Graph_N4_D2.txt\n"));
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "wrote: {}", summary.path.display())?;
    writeln!(writer, "nodes: {}", summary.node_count)?;
    writeln!(writer, "edges: {}", summary.edge_count)?;
    writeln!(writer, "max degree: {}", summary.max_degree)?;
    writeln!(writer, "sparse: {}", summary.sparse)?;
    match summary.seed {
        Some(seed) => writeln!(writer, "seed: {seed}")?,
        None => writeln!(writer, "seed: unknown")?,
    }
    Ok(())
}
