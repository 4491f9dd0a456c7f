//! Point (ASP) calculator

use lib_catalog::{BonusSchedule, Catalog, ProductDefinition};
use lib_types::{Points, SaleOptionFlags, SoldItem};
use serde::{Deserialize, Serialize};

use crate::errors::EngineResult;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointBreakdown {
    pub base: Points,
    pub extra: Points,
    pub total: Points,
}

/// Points for a resolved product.
///
/// Extra points: SoHo on a mobile tier that earns the business bonus, and
/// easy-switch on internet. Each applies at most once per item.
pub fn points_for_product(
    product: &ProductDefinition,
    flags: &SaleOptionFlags,
    schedule: &BonusSchedule,
) -> PointBreakdown {
    let base = product.points;
    let mut extra = Points::ZERO;

    let soho_tier = product
        .category
        .mobile_tier()
        .is_some_and(|tier| tier.is_medium_or_above())
        && product.flags.supports_soho;
    if flags.business_registration && soho_tier {
        extra += schedule.business_registration_points;
    }
    if flags.easy_switch && product.category.is_internet() {
        extra += schedule.easy_switch_points;
    }

    PointBreakdown {
        base,
        extra,
        total: base + extra,
    }
}

pub fn compute_points(catalog: &Catalog, item: &SoldItem) -> EngineResult<PointBreakdown> {
    let product = catalog.lookup(item.product_id.as_str())?;
    Ok(points_for_product(product, &item.flags, &catalog.bonuses))
}
