//! Engine errors.
//!
//! The engine is pure: the only failures are configuration defects (unknown
//! product, rank or plan, malformed upline chain). They abort the whole
//! computation; no partial result is ever returned.

use lib_catalog::CatalogError;
use lib_tariff::TariffError;
use lib_types::TypesError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Input(#[from] TypesError),

    #[error(transparent)]
    Tariff(#[from] TariffError),
}

pub type EngineResult<T> = Result<T, EngineError>;
