//! Behavioural tests for the `graphgen` binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use rstest::rstest;
use tempfile::TempDir;

fn run_in(dir: &Path, args: &[&str]) -> Output {
    match Command::new(env!("CARGO_BIN_EXE_graphgen"))
        .args(args)
        .current_dir(dir)
        .env("RUST_LOG", "warn")
        .output()
    {
        Ok(output) => output,
        Err(err) => panic!("failed to launch graphgen: {err}"),
    }
}

fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

#[rstest]
fn legacy_invocation_writes_the_sparse_file() {
    let dir = temp_dir();
    let output = run_in(
        dir.path(),
        &["9", "3", "-suppress", "-sparse", "a hand-picked description"],
    );
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Graph_N9_D3_sparse.txt"));
    assert!(stdout.contains("sparse: true"));

    let text = fs::read_to_string(dir.path().join("Graph_N9_D3_sparse.txt"))
        .unwrap_or_else(|err| panic!("output file missing: {err}"));
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3 + 9);
    assert_eq!(lines[0], "Graph_N9_D3");
    assert_eq!(lines[1], "a hand-picked description");
    assert_eq!(lines[2], "3");
    assert!(lines[3].starts_with("A:"));
    assert!(lines[11].starts_with("I:"));
}

#[rstest]
fn seeded_runs_are_reproducible() {
    let dir = temp_dir();
    let read = || {
        let output = run_in(dir.path(), &["40", "5", "--seed", "17", "--suppress"]);
        assert!(output.status.success());
        fs::read_to_string(dir.path().join("Graph_N40_D5.txt"))
            .unwrap_or_else(|err| panic!("output file missing: {err}"))
    };
    assert_eq!(read(), read());
}

#[rstest]
fn infeasible_configuration_fails_without_writing() {
    let dir = temp_dir();
    let output = run_in(dir.path(), &["4", "6"]);
    assert!(!output.status.success());
    let entries = fs::read_dir(dir.path())
        .unwrap_or_else(|err| panic!("temp dir unreadable: {err}"))
        .count();
    assert_eq!(entries, 0);
}

#[rstest]
#[case::missing_degree(&["12"], "Usage")]
#[case::non_numeric(&["twelve", "3"], "invalid value")]
#[case::fractional_degree(&["10", "3.5"], "invalid value")]
fn malformed_arguments_exit_with_usage_status(#[case] args: &[&str], #[case] expected: &str) {
    let dir = temp_dir();
    let output = run_in(dir.path(), args);
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error:"), "stderr: {stderr}");
    assert!(stderr.contains(expected), "stderr: {stderr}");
    let entries = fs::read_dir(dir.path())
        .unwrap_or_else(|err| panic!("temp dir unreadable: {err}"))
        .count();
    assert_eq!(entries, 0);
}

#[rstest]
fn hyphenated_description_is_written_verbatim() {
    let dir = temp_dir();
    let output = run_in(dir.path(), &["6", "3", "-draft", "-suppress", "--seed", "4"]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let text = fs::read_to_string(dir.path().join("Graph_N6_D3.txt"))
        .unwrap_or_else(|err| panic!("output file missing: {err}"));
    assert_eq!(text.lines().nth(1), Some("-draft"));
}
