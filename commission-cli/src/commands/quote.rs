//! Quote command: price a customer request against the tariff sheet

use lib_tariff::{compute_quote, QuoteRequest};

use crate::argument_parsing::QuoteArgs;
use crate::commands::{print_result, read_json};
use crate::config::EngineConfig;
use crate::error::CliResult;
use crate::output::Output;

pub fn handle_quote_command(
    args: &QuoteArgs,
    format: &str,
    config: &EngineConfig,
    output: &dyn Output,
) -> CliResult<()> {
    let request: QuoteRequest = read_json(&args.input)?;
    let quote = compute_quote(&config.tariff, &request)?;
    print_result(&quote, format, output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use crate::output::testing::MockOutput;
    use std::io::Write;

    fn request_file(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_quote_with_savings() {
        let file = request_file(
            r#"{
                "internet": "fiber-1000",
                "mobile_lines": ["mobile-medium"],
                "second_address": true,
                "current_monthly_cost": 5000
            }"#,
        );
        let output = MockOutput::new();
        let args = QuoteArgs {
            input: file.path().to_path_buf(),
        };
        handle_quote_command(&args, "json", &EngineConfig::default(), &output).unwrap();

        let printed = output.printed();
        assert!(printed.contains("\"price\": 2190"));
        assert!(printed.contains("\"savings\""));
    }

    #[test]
    fn test_unknown_plan_surfaces() {
        let file = request_file(r#"{ "internet": "dialup" }"#);
        let output = MockOutput::new();
        let args = QuoteArgs {
            input: file.path().to_path_buf(),
        };
        let err = handle_quote_command(&args, "json", &EngineConfig::default(), &output)
            .unwrap_err();
        assert!(matches!(err, CliError::Tariff(_)));
        assert!(output.documents().is_empty());
    }

    #[test]
    fn test_malformed_request() {
        let file = request_file("{ not json");
        let output = MockOutput::new();
        let args = QuoteArgs {
            input: file.path().to_path_buf(),
        };
        let err = handle_quote_command(&args, "json", &EngineConfig::default(), &output)
            .unwrap_err();
        assert!(matches!(err, CliError::InvalidInput { .. }));
    }
}
