//! Command handlers
//!
//! Each handler reads its request, calls into the pure engines, and prints
//! through an injected [`Output`](crate::output::Output).

pub mod catalog;
pub mod clawback;
pub mod deal;
pub mod qualify;
pub mod quote;

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::Read;
use std::path::Path;

use crate::argument_parsing::format_output;
use crate::error::{CliError, CliResult};
use crate::output::Output;

/// Read a JSON request from a file, or from stdin when the path is `-`
pub fn read_json<T: DeserializeOwned>(path: &Path) -> CliResult<T> {
    let content = if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|source| CliError::InputReadFailed {
                path: path.to_path_buf(),
                source,
            })?;
        buffer
    } else {
        std::fs::read_to_string(path).map_err(|source| CliError::InputReadFailed {
            path: path.to_path_buf(),
            source,
        })?
    };
    parse_json(&content, path)
}

/// Parse a JSON request, naming `origin` in the error
pub fn parse_json<T: DeserializeOwned>(content: &str, origin: &Path) -> CliResult<T> {
    serde_json::from_str(content).map_err(|e| CliError::InvalidInput {
        path: origin.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Serialize a result and print it in the requested format
pub fn print_result<T: Serialize>(value: &T, format: &str, output: &dyn Output) -> CliResult<()> {
    let json = serde_json::to_value(value)?;
    output.print(&format_output(&json, format)?)
}
