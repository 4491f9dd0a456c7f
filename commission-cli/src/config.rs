//! Engine configuration: which catalog and tariff sheet to compute against
//!
//! Each one is either loaded from a TOML file or falls back to the built-in
//! standard version. Both are validated as a whole on load.

use lib_catalog::Catalog;
use lib_tariff::TariffSheet;
use std::path::Path;
use tracing::debug;

use crate::error::CliResult;

#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub catalog: Catalog,
    pub tariff: TariffSheet,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            catalog: Catalog::standard(),
            tariff: TariffSheet::standard(),
        }
    }
}

impl EngineConfig {
    pub fn load(catalog_path: Option<&Path>, tariff_path: Option<&Path>) -> CliResult<Self> {
        let catalog = match catalog_path {
            Some(path) => Catalog::from_toml_file(path)?,
            None => Catalog::standard(),
        };
        let tariff = match tariff_path {
            Some(path) => TariffSheet::from_toml_file(path)?,
            None => TariffSheet::standard(),
        };
        debug!(
            catalog = %catalog.version,
            tariff = %tariff.version,
            "engine configuration loaded"
        );
        Ok(Self { catalog, tariff })
    }
}
