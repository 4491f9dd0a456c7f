//! Commission Command-Line Interface
//!
//! Entry point for the `commission` binary. Parses command-line arguments
//! and delegates to the appropriate command handler.

use commission_cli::run_cli;
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    run_cli()
}
