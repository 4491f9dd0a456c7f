//! Qualify command: PQS, activity, rank and milestone bonus for one period

use lib_commission::{evaluate_period, PeriodInput};

use crate::argument_parsing::QualifyArgs;
use crate::commands::{print_result, read_json};
use crate::config::EngineConfig;
use crate::error::CliResult;
use crate::output::Output;

pub fn handle_qualify_command(
    args: &QualifyArgs,
    format: &str,
    config: &EngineConfig,
    output: &dyn Output,
) -> CliResult<()> {
    let input: PeriodInput = read_json(&args.input)?;
    let report = evaluate_period(&config.catalog, &input);
    print_result(&report, format, output)
}
