//! Commission Catalog
//!
//! Versioned, read-only rate tables for the commission engine.
//!
//! # Design Principles
//!
//! 1. **Injected, not global** - every computation receives a `&Catalog`
//! 2. **Whole-version replacement** - a catalog is validated as a unit and
//!    never mutated after construction
//! 3. **No floats** - rates are integer money, points are fixed-point
//!
//! # Usage
//!
//! ```ignore
//! use lib_catalog::Catalog;
//!
//! let catalog = Catalog::standard();
//! let product = catalog.lookup("mobile-large")?;
//! assert!(product.flags.supports_portability);
//! ```

pub mod errors;
pub mod product;
pub mod bonus;
pub mod ranks;
pub mod qualification;
pub mod catalog;
mod standard;

pub use errors::{CatalogError, CatalogResult};
pub use product::{CommissionRates, ProductDefinition, ProductFlags, ResidualRates};
pub use bonus::{BonusSchedule, CategoryBonus};
pub use ranks::{RankLadder, RankRule};
pub use qualification::{ActivityRules, PqsRules};
pub use catalog::Catalog;

/// Version tag of the built-in catalog
pub const STANDARD_CATALOG_VERSION: &str = "2026.10";
