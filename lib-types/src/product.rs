//! Product and sale primitives.
//!
//! Pure data types. Rates, points and eligibility for a product live in the
//! catalog (`lib-catalog`); this module only names things.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

// =============================================================================
// PRODUCT IDENTIFIER
// =============================================================================

/// Catalog key of a product (e.g. `mobile-large`)
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for ProductId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// CATEGORIES
// =============================================================================

/// Mobile plan size, smallest first
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MobileTier {
    Child,
    Small,
    Medium,
    Large,
    Unlimited,
}

impl MobileTier {
    pub const ALL: &'static [MobileTier] = &[
        MobileTier::Child,
        MobileTier::Small,
        MobileTier::Medium,
        MobileTier::Large,
        MobileTier::Unlimited,
    ];

    /// Medium, large and unlimited tiers unlock convergence, portability and
    /// business bonuses. Child and small tiers never do.
    pub const fn is_medium_or_above(self) -> bool {
        matches!(self, MobileTier::Medium | MobileTier::Large | MobileTier::Unlimited)
    }

    /// Same id as the serialized form
    pub const fn as_str(self) -> &'static str {
        match self {
            MobileTier::Child => "child",
            MobileTier::Small => "small",
            MobileTier::Medium => "medium",
            MobileTier::Large => "large",
            MobileTier::Unlimited => "unlimited",
        }
    }
}

impl fmt::Display for MobileTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Product category as sold by the network
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "tier", rename_all = "snake_case")]
pub enum ProductCategory {
    Mobile(MobileTier),
    Internet,
    Tv,
    TvLite,
    EnergyResidential,
    EnergyBusiness,
    BoilerMaintenance,
}

impl ProductCategory {
    pub const fn is_mobile(self) -> bool {
        matches!(self, ProductCategory::Mobile(_))
    }

    pub const fn is_internet(self) -> bool {
        matches!(self, ProductCategory::Internet)
    }

    pub const fn is_energy(self) -> bool {
        matches!(
            self,
            ProductCategory::EnergyResidential | ProductCategory::EnergyBusiness
        )
    }

    /// Mobile tier, if this is a mobile product
    pub const fn mobile_tier(self) -> Option<MobileTier> {
        match self {
            ProductCategory::Mobile(tier) => Some(tier),
            _ => None,
        }
    }

    /// Bucket used by the balanced-points (PQS) check
    pub const fn point_category(self) -> PointCategory {
        match self {
            ProductCategory::Mobile(_) => PointCategory::Mobile,
            ProductCategory::Internet => PointCategory::Internet,
            ProductCategory::EnergyResidential | ProductCategory::EnergyBusiness => {
                PointCategory::Energy
            }
            ProductCategory::Tv | ProductCategory::TvLite | ProductCategory::BoilerMaintenance => {
                PointCategory::Other
            }
        }
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductCategory::Mobile(tier) => write!(f, "mobile/{}", tier),
            ProductCategory::Internet => f.write_str("internet"),
            ProductCategory::Tv => f.write_str("tv"),
            ProductCategory::TvLite => f.write_str("tv_lite"),
            ProductCategory::EnergyResidential => f.write_str("energy_residential"),
            ProductCategory::EnergyBusiness => f.write_str("energy_business"),
            ProductCategory::BoilerMaintenance => f.write_str("boiler_maintenance"),
        }
    }
}

/// Point buckets tracked for qualification
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointCategory {
    Mobile,
    Internet,
    Energy,
    Other,
}

// =============================================================================
// SALE
// =============================================================================

/// Options ticked on a single sold item.
///
/// Flags are advisory opt-ins: a flag the product cannot use contributes
/// nothing rather than failing the computation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct SaleOptionFlags {
    /// Sold together with a counterpart category (mobile + internet)
    pub convergence: bool,
    /// Number ported from a competitor
    pub portability: bool,
    /// Customer holds a business registration (SoHo)
    pub business_registration: bool,
    /// Internet-only switch from a competitor line
    pub easy_switch: bool,
    /// Paperless billing (energy)
    pub e_billing: bool,
    /// Direct-debit payment (energy)
    pub direct_debit: bool,
}

/// A product line inside a sale
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoldItem {
    pub product_id: ProductId,
    #[serde(default)]
    pub flags: SaleOptionFlags,
}

impl SoldItem {
    pub fn new(product_id: impl Into<ProductId>, flags: SaleOptionFlags) -> Self {
        Self {
            product_id: product_id.into(),
            flags,
        }
    }

    /// Item with no options ticked
    pub fn plain(product_id: impl Into<ProductId>) -> Self {
        Self::new(product_id, SaleOptionFlags::default())
    }
}

/// One customer transaction. Item order carries no meaning.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sale {
    pub items: Vec<SoldItem>,
}

impl Sale {
    pub fn new(items: Vec<SoldItem>) -> Self {
        Self { items }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl FromIterator<SoldItem> for Sale {
    fn from_iter<I: IntoIterator<Item = SoldItem>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
