//! Commission CLI
//!
//! Argument definitions and top-level dispatch.

use crate::commands;
use crate::config::EngineConfig;
use crate::error::CliResult;
use crate::output::{ConsoleOutput, Output};

use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use serde_json::Value;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Commission and tariff calculator
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(name = "commission")]
pub struct CommissionCli {
    /// Enable verbose output
    #[arg(short, long, env = "COMMISSION_VERBOSE")]
    pub verbose: bool,

    /// Output format (json, table)
    #[arg(short, long, default_value = "json", env = "COMMISSION_FORMAT")]
    pub format: String,

    /// Commission catalog TOML file (built-in standard catalog if omitted)
    #[arg(long, env = "COMMISSION_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Tariff sheet TOML file (built-in standard sheet if omitted)
    #[arg(long, env = "COMMISSION_TARIFF")]
    pub tariff: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CommissionCommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum CommissionCommand {
    /// Compute commission, points, residual and upline payouts for a sale
    Deal(DealArgs),

    /// Price a customer quote
    Quote(QuoteArgs),

    /// Split a paid amount into reclaimed and retained after cancellation
    Clawback(ClawbackArgs),

    /// Evaluate PQS, quarterly activity, rank and milestone bonus
    Qualify(QualifyArgs),

    /// Inspect the loaded catalog and tariff sheet
    Catalog(CatalogArgs),
}

#[derive(Args, Debug, Clone)]
pub struct DealArgs {
    /// Deal request JSON file, or `-` for stdin
    pub input: PathBuf,
}

#[derive(Args, Debug, Clone)]
pub struct QuoteArgs {
    /// Quote request JSON file, or `-` for stdin
    pub input: PathBuf,
}

#[derive(Args, Debug, Clone)]
pub struct ClawbackArgs {
    /// Amount paid, in cents
    #[arg(long, conflicts_with = "deal")]
    pub amount: Option<u64>,

    /// Deal request JSON file; claws back the seller and every upline payout
    #[arg(long)]
    pub deal: Option<PathBuf>,

    /// Months the service stayed active (fractional allowed)
    #[arg(long, conflicts_with_all = ["activated_on", "cancelled_on"])]
    pub months: Option<f64>,

    /// Activation date (YYYY-MM-DD); whole months are counted to --cancelled-on
    #[arg(long, requires = "cancelled_on")]
    pub activated_on: Option<NaiveDate>,

    /// Cancellation date (YYYY-MM-DD)
    #[arg(long, requires = "activated_on")]
    pub cancelled_on: Option<NaiveDate>,
}

#[derive(Args, Debug, Clone)]
pub struct QualifyArgs {
    /// Period input JSON file, or `-` for stdin
    pub input: PathBuf,
}

#[derive(Args, Debug, Clone)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub action: CatalogAction,
}

#[derive(Subcommand, Debug, Clone)]
pub enum CatalogAction {
    /// Print the catalog and tariff sheet
    Show,
    /// Validate and summarize the catalog and tariff sheet
    Check,
}

pub fn run_cli() -> Result<ExitCode> {
    let cli = CommissionCli::parse();

    // RUST_LOG wins over --verbose
    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {e}"))?;

    let output = ConsoleOutput;
    let code = report(execute(&cli, &output), &output)?;
    Ok(code)
}

/// Load the configured tables and run the selected command
pub fn execute(cli: &CommissionCli, output: &dyn Output) -> CliResult<()> {
    let config = EngineConfig::load(cli.catalog.as_deref(), cli.tariff.as_deref())?;

    match &cli.command {
        CommissionCommand::Deal(args) => {
            commands::deal::handle_deal_command(args, &cli.format, &config, output)
        }
        CommissionCommand::Quote(args) => {
            commands::quote::handle_quote_command(args, &cli.format, &config, output)
        }
        CommissionCommand::Clawback(args) => {
            commands::clawback::handle_clawback_command(args, &cli.format, &config, output)
        }
        CommissionCommand::Qualify(args) => {
            commands::qualify::handle_qualify_command(args, &cli.format, &config, output)
        }
        CommissionCommand::Catalog(args) => {
            commands::catalog::handle_catalog_command(args, &cli.format, &config, output)
        }
    }
}

/// Turn a command outcome into the process exit code; failures are
/// written to the status stream
pub fn report(outcome: CliResult<()>, output: &dyn Output) -> CliResult<ExitCode> {
    match outcome {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            output.status(&format!("error: {err}"))?;
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Render a JSON value in the requested format
pub fn format_output(data: &Value, format: &str) -> CliResult<String> {
    match format {
        "json" => Ok(serde_json::to_string_pretty(data)?),
        "table" => {
            if let Some(obj) = data.as_object() {
                let mut result = String::new();
                for (key, value) in obj {
                    result.push_str(&format!("{:<24} {}\n", key, value));
                }
                Ok(result)
            } else if let Some(array) = data.as_array() {
                let mut result = String::new();
                for (i, item) in array.iter().enumerate() {
                    result.push_str(&format!("[{}] {}\n", i, item));
                }
                Ok(result)
            } else {
                Ok(data.to_string())
            }
        }
        other => Err(crate::error::CliError::UnsupportedFormat(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::testing::MockOutput;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        CommissionCli::command().debug_assert();
    }

    #[test]
    fn test_parse_deal() {
        let cli = CommissionCli::try_parse_from(["commission", "deal", "sale.json"]).unwrap();
        assert_eq!(cli.format, "json");
        assert!(matches!(cli.command, CommissionCommand::Deal(ref args) if args.input == PathBuf::from("sale.json")));
    }

    #[test]
    fn test_parse_clawback_dates() {
        let cli = CommissionCli::try_parse_from([
            "commission",
            "clawback",
            "--amount",
            "4000",
            "--activated-on",
            "2026-01-15",
            "--cancelled-on",
            "2026-04-20",
        ])
        .unwrap();
        match cli.command {
            CommissionCommand::Clawback(args) => {
                assert_eq!(args.amount, Some(4_000));
                assert_eq!(args.activated_on, NaiveDate::from_ymd_opt(2026, 1, 15));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_months_conflicts_with_dates() {
        let result = CommissionCli::try_parse_from([
            "commission",
            "clawback",
            "--amount",
            "4000",
            "--months",
            "2",
            "--activated-on",
            "2026-01-15",
            "--cancelled-on",
            "2026-04-20",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_execute_catalog_check() {
        let cli = CommissionCli::try_parse_from(["commission", "catalog", "check"]).unwrap();
        let output = MockOutput::new();

        let code = report(execute(&cli, &output), &output).unwrap();

        assert_eq!(code, ExitCode::SUCCESS);
        output.assert_printed("\"products\": 11");
        assert!(output.statuses()[0].contains("are valid"));
    }

    #[test]
    fn test_failed_command_reports_on_status_stream() {
        let cli = CommissionCli::try_parse_from([
            "commission",
            "--catalog",
            "/nonexistent/catalog.toml",
            "catalog",
            "check",
        ])
        .unwrap();
        let output = MockOutput::new();

        let code = report(execute(&cli, &output), &output).unwrap();

        assert_eq!(code, ExitCode::FAILURE);
        assert!(output.documents().is_empty());
        let statuses = output.statuses();
        assert_eq!(statuses.len(), 1);
        assert!(statuses[0].starts_with("error: "), "{statuses:?}");
    }

    #[test]
    fn test_format_table() {
        let value = serde_json::json!({ "reclaimed": 750, "retained": 250 });
        let table = format_output(&value, "table").unwrap();
        assert!(table.contains("reclaimed"));
        assert!(table.contains("250"));
        assert!(format_output(&value, "yaml").is_err());
    }
}
