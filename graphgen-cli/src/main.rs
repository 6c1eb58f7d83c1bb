//! CLI entry point for graphgen.
//!
//! Parses command-line arguments with clap, generates and writes the graph,
//! prints a summary to stdout, and maps errors to exit codes. Logging is
//! initialised first so construction diagnostics flow through `tracing`.

use std::env;
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use graphgen_cli::{
    cli::{Cli, CliError, normalise_legacy_flags, render_summary, run_cli},
    logging::{self, LoggingError},
};
use tracing::{error, field};

/// Parse CLI arguments, execute the command, render the summary, and flush the
/// output stream.
fn try_main() -> Result<()> {
    let cli = Cli::parse_from(normalise_legacy_flags(env::args_os()));
    let summary = run_cli(cli).context("failed to generate graph")?;
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    render_summary(&summary, &mut writer).context("failed to render summary")?;
    writer.flush().context("failed to flush output")?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main() {
        let (code, reason) = err
            .downcast_ref::<CliError>()
            .and_then(|cli_error| match cli_error {
                CliError::Core(core) => Some((Some(core.code()), core.configuration_code())),
                CliError::Io { .. } => None,
            })
            .unwrap_or((None, None));

        let code_field = code.map(|value| field::display(value.as_str()));
        let reason_field = reason.map(|value| field::display(value.as_str()));

        error!(
            error = %format!("{err:#}"),
            code = code_field,
            reason = reason_field,
            "command execution failed"
        );
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

#[expect(
    clippy::print_stderr,
    reason = "Tracing is unavailable when logging initialisation fails."
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialize logging: {err}");
}
