//! Per-item commission
//!
//! base comes from the catalog rate for the rank's tier class; bonuses come
//! from [`crate::bonus`]. Every component is non-negative and
//! `total = base + convergence + portability + business + add_on`.

use lib_catalog::{BonusSchedule, Catalog, ProductDefinition};
use lib_types::{Amount, ConsultantRank, SaleOptionFlags, SoldItem};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bonus::{add_on_bonus, business_bonus, convergence_bonus, portability_bonus};
use crate::errors::EngineResult;

/// Commission components for one sold item
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommissionBreakdown {
    pub base: Amount,
    pub convergence_bonus: Amount,
    pub portability_bonus: Amount,
    pub business_bonus: Amount,
    pub add_on_bonus: Amount,
    pub total: Amount,
}

impl CommissionBreakdown {
    /// Everything above the base; stays with the seller
    pub fn bonuses(&self) -> Amount {
        self.convergence_bonus
            .saturating_add(self.portability_bonus)
            .saturating_add(self.business_bonus)
            .saturating_add(self.add_on_bonus)
    }
}

/// Commission for a resolved product
pub fn commission_for_product(
    product: &ProductDefinition,
    flags: &SaleOptionFlags,
    rank: ConsultantRank,
    schedule: &BonusSchedule,
) -> CommissionBreakdown {
    let base = product.commission_rate(rank.commission_tier());
    let convergence = convergence_bonus(product, flags, schedule);
    let portability = portability_bonus(product, flags, schedule);
    let business = business_bonus(product, flags, schedule);
    let add_on = add_on_bonus(product, flags, schedule);

    if flags.convergence && convergence == 0 {
        debug!(product = %product.id, "convergence flag has no effect");
    }
    if (flags.portability || flags.easy_switch) && portability == 0 {
        debug!(product = %product.id, "portability flag has no effect");
    }
    if flags.business_registration && business == 0 {
        debug!(product = %product.id, "business registration flag has no commission effect");
    }

    let mut breakdown = CommissionBreakdown {
        base,
        convergence_bonus: convergence,
        portability_bonus: portability,
        business_bonus: business,
        add_on_bonus: add_on,
        total: 0,
    };
    breakdown.total = base.saturating_add(breakdown.bonuses());
    breakdown
}

/// Commission for one sold item
///
/// The item's flags are taken at face value. Inside a deal, use
/// [`crate::compute_deal`], which first checks that the convergence flag is
/// backed by a counterpart item in the same sale.
///
/// # Errors
///
/// Fails if the product id is not in the catalog.
pub fn compute_item_commission(
    catalog: &Catalog,
    item: &SoldItem,
    rank: ConsultantRank,
) -> EngineResult<CommissionBreakdown> {
    let product = catalog.lookup(item.product_id.as_str())?;
    Ok(commission_for_product(
        product,
        &item.flags,
        rank,
        &catalog.bonuses,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::EngineError;
    use lib_catalog::CatalogError;

    #[test]
    fn test_base_follows_tier_class() {
        let catalog = Catalog::standard();
        let item = SoldItem::plain("mobile-large");

        let entry = compute_item_commission(&catalog, &item, ConsultantRank::Consultant).unwrap();
        let senior =
            compute_item_commission(&catalog, &item, ConsultantRank::SeniorConsultant).unwrap();
        let director = compute_item_commission(&catalog, &item, ConsultantRank::Director).unwrap();

        assert_eq!(entry.base, 3_000);
        assert_eq!(senior.base, 3_700);
        assert_eq!(director.base, senior.base);
        assert_eq!(entry.total, entry.base);
    }

    #[test]
    fn test_total_is_sum_of_components() {
        let catalog = Catalog::standard();
        let item = SoldItem::new(
            "mobile-unlimited",
            SaleOptionFlags {
                convergence: true,
                portability: true,
                business_registration: true,
                ..Default::default()
            },
        );
        let result = compute_item_commission(&catalog, &item, ConsultantRank::Manager).unwrap();

        assert_eq!(result.base, 5_000);
        assert_eq!(result.convergence_bonus, 500);
        assert_eq!(result.portability_bonus, 500);
        assert_eq!(result.business_bonus, 1_000);
        assert_eq!(result.add_on_bonus, 0);
        assert_eq!(result.total, 7_000);
    }

    #[test]
    fn test_bonuses_are_rank_independent() {
        let catalog = Catalog::standard();
        let item = SoldItem::new(
            "internet",
            SaleOptionFlags {
                convergence: true,
                easy_switch: true,
                ..Default::default()
            },
        );
        let entry = compute_item_commission(&catalog, &item, ConsultantRank::Consultant).unwrap();
        let top =
            compute_item_commission(&catalog, &item, ConsultantRank::ExecutiveDirector).unwrap();
        assert_eq!(entry.bonuses(), top.bonuses());
        assert_eq!(entry.bonuses(), 2_000);
    }

    #[test]
    fn test_inapplicable_flags_yield_zero() {
        let catalog = Catalog::standard();
        let item = SoldItem::new(
            "tv-lite",
            SaleOptionFlags {
                convergence: true,
                portability: true,
                business_registration: true,
                easy_switch: true,
                e_billing: true,
                direct_debit: true,
            },
        );
        let result = compute_item_commission(&catalog, &item, ConsultantRank::Consultant).unwrap();
        assert_eq!(result.bonuses(), 0);
        assert_eq!(result.total, 800);
    }

    #[test]
    fn test_unknown_product_fails() {
        let catalog = Catalog::standard();
        let err = compute_item_commission(
            &catalog,
            &SoldItem::plain("satellite"),
            ConsultantRank::Consultant,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            EngineError::Catalog(CatalogError::UnknownProduct(ref id)) if id == "satellite"
        ));
    }
}
