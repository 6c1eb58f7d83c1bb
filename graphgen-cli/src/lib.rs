//! Support library for the graphgen CLI binary.
//!
//! Re-exports the CLI and logging modules so tests can exercise the command
//! pipeline without forking a subprocess.

pub mod cli;
pub mod logging;
