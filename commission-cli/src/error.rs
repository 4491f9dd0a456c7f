//! Structured error types for the commission CLI

use lib_catalog::CatalogError;
use lib_commission::EngineError;
use lib_tariff::TariffError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Tariff error: {0}")]
    Tariff(#[from] TariffError),

    #[error("Failed to read input from {path}: {source}")]
    InputReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid input in {path}: {reason}")]
    InvalidInput { path: PathBuf, reason: String },

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type CliResult<T> = Result<T, CliError>;
