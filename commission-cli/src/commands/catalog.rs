//! Catalog command: show or check the loaded rate tables

use serde::Serialize;

use crate::argument_parsing::{CatalogAction, CatalogArgs};
use crate::commands::print_result;
use crate::config::EngineConfig;
use crate::error::CliResult;
use crate::output::Output;

/// One-line-per-fact summary of the loaded configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogSummary {
    pub catalog_version: String,
    pub products: usize,
    pub residual_products: usize,
    pub ranks: usize,
    pub tariff_version: String,
    pub internet_plans: usize,
    pub mobile_plans: usize,
    pub tv_plans: usize,
}

impl CatalogSummary {
    pub fn of(config: &EngineConfig) -> Self {
        let catalog = &config.catalog;
        let tariff = &config.tariff;
        Self {
            catalog_version: catalog.version.clone(),
            products: catalog.products().count(),
            residual_products: catalog
                .products()
                .filter(|p| p.flags.generates_residual)
                .count(),
            ranks: catalog.ranks.rules().len(),
            tariff_version: tariff.version.clone(),
            internet_plans: tariff.internet.len(),
            mobile_plans: tariff.mobile.len(),
            tv_plans: tariff.tv.len(),
        }
    }
}

#[derive(Serialize)]
struct LoadedTables<'a> {
    catalog: &'a lib_catalog::Catalog,
    tariff: &'a lib_tariff::TariffSheet,
}

pub fn handle_catalog_command(
    args: &CatalogArgs,
    format: &str,
    config: &EngineConfig,
    output: &dyn Output,
) -> CliResult<()> {
    match args.action {
        CatalogAction::Show => {
            let tables = LoadedTables {
                catalog: &config.catalog,
                tariff: &config.tariff,
            };
            print_result(&tables, format, output)
        }
        CatalogAction::Check => {
            // Loading already validated both tables
            let summary = CatalogSummary::of(config);
            output.status(&format!(
                "catalog {} and tariff sheet {} are valid",
                summary.catalog_version, summary.tariff_version
            ))?;
            print_result(&summary, format, output)
        }
    }
}
