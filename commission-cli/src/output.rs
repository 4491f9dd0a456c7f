//! Result and status streams
//!
//! A command writes exactly one rendered document (JSON or table) through
//! [`Output::print`]; that is all stdout ever carries, so the binary can sit
//! in a pipeline. Confirmations and command failures go through
//! [`Output::status`], which the console sends to stderr.

use crate::error::CliResult;

pub trait Output: Send + Sync {
    /// Rendered result document
    fn print(&self, document: &str) -> CliResult<()>;

    /// One-line operator notice, kept off the result stream
    fn status(&self, line: &str) -> CliResult<()>;
}

/// stdout for documents, stderr for status lines
pub struct ConsoleOutput;

impl Output for ConsoleOutput {
    fn print(&self, document: &str) -> CliResult<()> {
        println!("{}", document);
        Ok(())
    }

    fn status(&self, line: &str) -> CliResult<()> {
        eprintln!("{}", line);
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::testing::MockOutput;
    use super::*;

    #[test]
    fn test_status_lines_stay_off_the_result_stream() {
        let output = MockOutput::new();
        output.status("catalog 2026.10 is valid").unwrap();
        output.print("{\"commission_total\": 8500}").unwrap();

        assert_eq!(output.documents(), vec!["{\"commission_total\": 8500}".to_string()]);
        assert_eq!(output.statuses(), vec!["catalog 2026.10 is valid".to_string()]);
    }
}
