//! Tariff errors

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TariffError {
    #[error("Unknown {kind} plan '{id}'")]
    UnknownPlan { kind: &'static str, id: String },

    #[error("Invalid tariff sheet: {0}")]
    InvalidSheet(String),

    #[error("Failed to parse tariff sheet: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to read tariff sheet from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TariffError {
    pub fn unknown_plan(kind: &'static str, id: impl Into<String>) -> Self {
        Self::UnknownPlan {
            kind,
            id: id.into(),
        }
    }
}

pub type TariffResult<T> = Result<T, TariffError>;
