//! Command-line interface orchestration for graphgen.
//!
//! Parses `graphgen <num_nodes> <max_degree> [-suppress] [-sparse]
//! [description]`, generates the graph, and writes it as an adjacency list.

mod commands;

pub use commands::{
    Cli, CliError, ExecutionSummary, normalise_legacy_flags, render_summary, run_cli,
};

#[cfg(test)]
mod tests;
