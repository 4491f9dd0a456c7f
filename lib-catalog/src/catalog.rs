//! Versioned catalog
//!
//! The catalog is the only shared input of the engine. It is built once
//! (built-in or loaded from TOML), validated as a whole, and then only read.

use std::collections::BTreeMap;
use std::path::Path;

use lib_types::{ProductCategory, ProductId};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bonus::BonusSchedule;
use crate::errors::{CatalogError, CatalogResult};
use crate::product::ProductDefinition;
use crate::qualification::{ActivityRules, PqsRules};
use crate::ranks::RankLadder;

/// Complete rate configuration for one catalog version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub version: String,
    pub products: BTreeMap<ProductId, ProductDefinition>,
    pub bonuses: BonusSchedule,
    pub ranks: RankLadder,
    pub pqs: PqsRules,
    pub activity: ActivityRules,
}

impl Catalog {
    /// Resolve a product id
    ///
    /// A miss is a configuration error: every id referenced by a sale must
    /// exist in the catalog version it is computed against.
    pub fn lookup(&self, product_id: &str) -> CatalogResult<&ProductDefinition> {
        self.products
            .get(product_id)
            .ok_or_else(|| CatalogError::UnknownProduct(product_id.to_string()))
    }

    pub fn contains(&self, product_id: &str) -> bool {
        self.products.contains_key(product_id)
    }

    /// Products in id order
    pub fn products(&self) -> impl Iterator<Item = &ProductDefinition> {
        self.products.values()
    }

    /// Products of one category, in id order
    pub fn products_in(
        &self,
        category: ProductCategory,
    ) -> impl Iterator<Item = &ProductDefinition> {
        self.products
            .values()
            .filter(move |product| product.category == category)
    }

    /// Parse and validate a catalog version from TOML
    pub fn from_toml_str(content: &str) -> CatalogResult<Self> {
        let catalog: Catalog = toml::from_str(content)?;
        catalog.validate()?;
        debug!(
            version = %catalog.version,
            products = catalog.products.len(),
            "Loaded commission catalog"
        );
        Ok(catalog)
    }

    /// Read, parse and validate a catalog version from a TOML file
    pub fn from_toml_file(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Check whole-catalog invariants
    pub fn validate(&self) -> CatalogResult<()> {
        if self.version.trim().is_empty() {
            return Err(CatalogError::InvalidCatalog(
                "catalog version must not be empty".to_string(),
            ));
        }
        if self.products.is_empty() {
            return Err(CatalogError::InvalidCatalog(format!(
                "catalog '{}' has no products",
                self.version
            )));
        }

        for (key, product) in &self.products {
            if key != &product.id {
                return Err(CatalogError::InvalidCatalog(format!(
                    "product listed under '{}' declares id '{}'",
                    key, product.id
                )));
            }
            if !product.flags.generates_residual && !product.residual.is_zero() {
                return Err(CatalogError::InvalidCatalog(format!(
                    "product '{}' does not generate residual but lists residual rates",
                    product.id
                )));
            }
            if let ProductCategory::Mobile(tier) = product.category {
                let unlocks_bonus = product.flags.supports_portability
                    || product.flags.supports_convergence
                    || product.flags.supports_soho;
                if !tier.is_medium_or_above() && unlocks_bonus {
                    return Err(CatalogError::InvalidCatalog(format!(
                        "mobile tier {:?} of '{}' cannot support bonus options",
                        tier, product.id
                    )));
                }
            }
        }

        self.ranks.validate()?;

        if self.pqs.window_days == 0 {
            return Err(CatalogError::InvalidCatalog(
                "PQS window must span at least one day".to_string(),
            ));
        }
        Ok(())
    }
}
