//! Catalog errors.
//!
//! Every variant is a configuration defect: the caller must surface it,
//! never swallow it.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Unknown product id '{0}'")]
    UnknownProduct(String),

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to read catalog from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type CatalogResult<T> = Result<T, CatalogError>;
