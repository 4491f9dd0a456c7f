//! Commission CLI Library
//!
//! Thin shell around the commission and tariff engines: reads plain JSON
//! requests, runs the pure computations against a catalog and tariff sheet,
//! prints the results.
//!
//! ## Architecture
//!
//! - **Functional Core**: `lib-commission`, `lib-tariff` (no I/O, no clock)
//! - **Imperative Shell** (`commands/` module): file reading, output
//! - **Error Handling** (`error` module): structured CLI error types
//! - **Output Abstraction** (`output` module): testable printing interface

pub mod argument_parsing;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use argument_parsing::{execute, format_output, report, run_cli, CommissionCli, CommissionCommand};
pub use config::EngineConfig;
pub use error::{CliError, CliResult};
pub use output::Output;

/// CLI version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
