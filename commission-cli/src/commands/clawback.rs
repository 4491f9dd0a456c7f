//! Clawback command
//!
//! Either a single amount (`--amount`) or a whole deal (`--deal`), with the
//! elapsed time given as `--months` or as an activation/cancellation date
//! pair.

use lib_commission::{clawback_deal, compute_clawback, whole_months_between};

use crate::argument_parsing::ClawbackArgs;
use crate::commands::deal::{evaluate_deal, DealRequest};
use crate::commands::{print_result, read_json};
use crate::config::EngineConfig;
use crate::error::{CliError, CliResult};
use crate::output::Output;

// ============================================================================
// PURE LOGIC
// ============================================================================

/// Months active from the arguments
pub fn resolve_months(args: &ClawbackArgs) -> CliResult<f64> {
    match (args.months, args.activated_on, args.cancelled_on) {
        (Some(months), None, None) => Ok(months),
        (None, Some(activated), Some(cancelled)) => {
            Ok(f64::from(whole_months_between(activated, cancelled)))
        }
        _ => Err(CliError::InvalidArguments(
            "give either --months or both --activated-on and --cancelled-on".to_string(),
        )),
    }
}

// ============================================================================
// IMPERATIVE SHELL
// ============================================================================

pub fn handle_clawback_command(
    args: &ClawbackArgs,
    format: &str,
    config: &EngineConfig,
    output: &dyn Output,
) -> CliResult<()> {
    let months = resolve_months(args)?;

    match (args.amount, &args.deal) {
        (Some(amount), None) => print_result(&compute_clawback(amount, months), format, output),
        (None, Some(path)) => {
            let request: DealRequest = read_json(path)?;
            let result = evaluate_deal(&request, config)?;
            print_result(&clawback_deal(&result, months), format, output)
        }
        _ => Err(CliError::InvalidArguments(
            "give either --amount or --deal".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::testing::MockOutput;
    use chrono::NaiveDate;
    use std::io::Write;

    fn args() -> ClawbackArgs {
        ClawbackArgs {
            amount: None,
            deal: None,
            months: None,
            activated_on: None,
            cancelled_on: None,
        }
    }

    #[test]
    fn test_resolve_months_from_dates() {
        let args = ClawbackArgs {
            activated_on: NaiveDate::from_ymd_opt(2026, 1, 15),
            cancelled_on: NaiveDate::from_ymd_opt(2026, 7, 14),
            ..args()
        };
        assert_eq!(resolve_months(&args).unwrap(), 5.0);
    }

    #[test]
    fn test_resolve_months_requires_a_duration() {
        assert!(matches!(
            resolve_months(&args()),
            Err(CliError::InvalidArguments(_))
        ));
    }

    #[test]
    fn test_single_amount() {
        let output = MockOutput::new();
        let args = ClawbackArgs {
            amount: Some(1_001),
            months: Some(3.0),
            ..args()
        };
        handle_clawback_command(&args, "json", &EngineConfig::default(), &output).unwrap();

        let printed = output.printed();
        assert!(printed.contains("\"reclaimed\": 751"));
        assert!(printed.contains("\"retained\": 250"));
        assert!(printed.contains("\"early_term\""));
    }

    #[test]
    fn test_whole_deal() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            br#"{ "rank": "consultant", "upline": ["alice"], "items": [{ "product_id": "internet" }] }"#,
        )
        .unwrap();

        let output = MockOutput::new();
        let args = ClawbackArgs {
            deal: Some(file.path().to_path_buf()),
            months: Some(0.5),
            ..args()
        };
        handle_clawback_command(&args, "json", &EngineConfig::default(), &output).unwrap();

        let printed = output.printed();
        assert!(printed.contains("\"total_reclaimed\": 3500"));
        assert!(printed.contains("\"alice\""));
    }

    #[test]
    fn test_amount_or_deal_required() {
        let output = MockOutput::new();
        let args = ClawbackArgs {
            months: Some(2.0),
            ..args()
        };
        let err = handle_clawback_command(&args, "json", &EngineConfig::default(), &output)
            .unwrap_err();
        assert!(matches!(err, CliError::InvalidArguments(_)));
    }
}
