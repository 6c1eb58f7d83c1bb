//! Tests for CLI argument handling and file output.

use super::commands::*;

use std::fs;
use std::path::Path;

use clap::Parser;
use graphgen_core::{ConfigurationError, GraphGenError, read_adjacency_list};
use rstest::{fixture, rstest};
use tempfile::TempDir;

type TestResult = Result<(), Box<dyn std::error::Error>>;

#[fixture]
fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

fn cli_for(dir: &Path, nodes: usize, degree: usize) -> Cli {
    Cli {
        num_nodes: nodes,
        max_degree: degree,
        description: None,
        suppress: true,
        sparse: false,
        seed: Some(42),
        output_dir: dir.to_path_buf(),
    }
}

fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(normalise_legacy_flags(args.iter().copied()))
}

#[rstest]
fn writes_a_readable_adjacency_list(temp_dir: TempDir) -> TestResult {
    let summary = run_cli(cli_for(temp_dir.path(), 12, 4))?;
    assert_eq!(summary.path, temp_dir.path().join("Graph_N12_D4.txt"));
    assert_eq!(summary.node_count, 12);
    assert_eq!(summary.seed, Some(42));

    let text = fs::read_to_string(&summary.path)?;
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("Graph_N12_D4"));
    assert_eq!(
        lines.next(),
        Some("A graph with 12 nodes and a max degree of 4")
    );
    assert_eq!(lines.next(), Some("4"));

    let parsed = read_adjacency_list(text.as_bytes())?;
    assert_eq!(parsed.adjacency.node_count(), 12);
    assert_eq!(parsed.adjacency.edge_count(), summary.edge_count);
    assert!(parsed.adjacency.contains_edge(0, 11));
    Ok(())
}

#[rstest]
fn sparse_runs_use_a_distinct_file_name(temp_dir: TempDir) -> TestResult {
    let mut cli = cli_for(temp_dir.path(), 10, 3);
    cli.sparse = true;
    cli.description = Some("sparse sample".into());
    let summary = run_cli(cli)?;
    assert!(summary.sparse);
    assert_eq!(summary.path, temp_dir.path().join("Graph_N10_D3_sparse.txt"));
    let text = fs::read_to_string(&summary.path)?;
    assert_eq!(text.lines().nth(1), Some("sparse sample"));
    Ok(())
}

#[rstest]
fn same_seed_writes_identical_files(temp_dir: TempDir) -> TestResult {
    let first = run_cli(cli_for(temp_dir.path(), 20, 5))?;
    let first_text = fs::read_to_string(&first.path)?;
    let second = run_cli(cli_for(temp_dir.path(), 20, 5))?;
    let second_text = fs::read_to_string(&second.path)?;
    assert_eq!(first_text, second_text);
    Ok(())
}

#[rstest]
fn existing_file_is_truncated(temp_dir: TempDir) -> TestResult {
    let path = temp_dir.path().join("Graph_N3_D2.txt");
    fs::write(&path, "stale\n".repeat(100))?;
    run_cli(cli_for(temp_dir.path(), 3, 2))?;
    let text = fs::read_to_string(&path)?;
    assert!(!text.contains("stale"));
    assert_eq!(text.lines().count(), 3 + 3);
    Ok(())
}

#[rstest]
#[case::too_few_nodes(1, 2)]
#[case::too_small_degree(5, 1)]
#[case::too_many_hubs(4, 4)]
fn invalid_configuration_writes_nothing(
    temp_dir: TempDir,
    #[case] nodes: usize,
    #[case] degree: usize,
) -> TestResult {
    let err = match run_cli(cli_for(temp_dir.path(), nodes, degree)) {
        Ok(summary) => panic!("configuration must be rejected: {summary:?}"),
        Err(err) => err,
    };
    assert!(matches!(
        err,
        CliError::Core(GraphGenError::InvalidConfiguration(_))
    ));
    assert_eq!(fs::read_dir(temp_dir.path())?.count(), 0);
    Ok(())
}

#[rstest]
fn hub_overflow_reports_its_reason(temp_dir: TempDir) {
    let err = run_cli(cli_for(temp_dir.path(), 4, 4)).expect_err("hubs exceed interior");
    assert!(matches!(
        err,
        CliError::Core(GraphGenError::InvalidConfiguration(
            ConfigurationError::HubSampleExceedsInterior { hubs: 2, interior: 1, .. }
        ))
    ));
}

#[rstest]
fn missing_output_directory_is_an_io_error(temp_dir: TempDir) {
    let cli = cli_for(&temp_dir.path().join("absent"), 5, 2);
    let err = run_cli(cli).expect_err("directory does not exist");
    assert!(matches!(err, CliError::Io { .. }));
}

#[rstest]
#[case::legacy_order(&["graphgen", "8", "3", "-suppress", "-sparse", "demo"])]
#[case::reversed(&["graphgen", "8", "3", "-sparse", "-suppress", "demo"])]
#[case::description_first(&["graphgen", "8", "3", "demo", "-sparse", "-suppress"])]
#[case::modern(&["graphgen", "8", "3", "--suppress", "--sparse", "demo"])]
fn flags_are_recognised_in_any_order(#[case] args: &[&str]) -> TestResult {
    let cli = parse(args)?;
    assert_eq!(cli.num_nodes, 8);
    assert_eq!(cli.max_degree, 3);
    assert!(cli.suppress);
    assert!(cli.sparse);
    assert_eq!(cli.description.as_deref(), Some("demo"));
    Ok(())
}

#[rstest]
#[case::leading_dash(&["graphgen", "8", "3", "-draft", "-sparse"], "-draft")]
#[case::double_dash(&["graphgen", "8", "3", "--", "-sparse"], "-sparse")]
#[case::after_flags(&["graphgen", "8", "3", "--suppress", "-x y"], "-x y")]
fn hyphenated_descriptions_pass_through(#[case] args: &[&str], #[case] expected: &str) -> TestResult {
    let cli = parse(args)?;
    assert_eq!(cli.description.as_deref(), Some(expected));
    Ok(())
}

#[rstest]
fn optional_arguments_default_off() -> TestResult {
    let cli = parse(&["graphgen", "8", "3"])?;
    assert!(!cli.suppress);
    assert!(!cli.sparse);
    assert_eq!(cli.description, None);
    assert_eq!(cli.seed, None);
    assert_eq!(cli.output_dir, Path::new("."));
    Ok(())
}

#[rstest]
#[case::missing_degree(&["graphgen", "8"])]
#[case::missing_both(&["graphgen"])]
#[case::non_numeric_nodes(&["graphgen", "eight", "3"])]
#[case::negative_degree(&["graphgen", "8", "-3"])]
#[case::extra_positional(&["graphgen", "8", "3", "one", "two"])]
fn malformed_arguments_are_usage_errors(#[case] args: &[&str]) {
    assert!(parse(args).is_err());
}

#[rstest]
fn render_summary_lists_every_field() -> TestResult {
    let summary = ExecutionSummary {
        path: "out/Graph_N5_D2.txt".into(),
        node_count: 5,
        edge_count: 4,
        max_degree: 2,
        sparse: true,
        seed: None,
    };
    let mut buffer = Vec::new();
    render_summary(&summary, &mut buffer)?;
    let text = String::from_utf8(buffer)?;
    assert!(text.contains("wrote: out/Graph_N5_D2.txt"));
    assert!(text.contains("nodes: 5"));
    assert!(text.contains("edges: 4"));
    assert!(text.contains("max degree: 2"));
    assert!(text.contains("sparse: true"));
    assert!(text.contains("seed: unknown"));
    Ok(())
}
