//! Bonus predicates
//!
//! Each function maps (product, flags) to one bonus component. A flag the
//! product cannot use yields 0; nothing here fails. Amounts come from the
//! catalog's [`BonusSchedule`] and are rank-independent.

use lib_catalog::{BonusSchedule, ProductDefinition};
use lib_types::{Amount, ProductCategory, SaleOptionFlags};

/// Mobile medium+ or internet. Child and small mobile tiers never qualify for
/// the convergence or portability bonus.
fn qualifying_category(category: ProductCategory) -> bool {
    match category {
        ProductCategory::Mobile(tier) => tier.is_medium_or_above(),
        ProductCategory::Internet => true,
        _ => false,
    }
}

/// Category-specific amount from a mobile/internet bonus pair
fn category_amount(category: ProductCategory, mobile: Amount, internet: Amount) -> Amount {
    match category {
        ProductCategory::Mobile(_) => mobile,
        ProductCategory::Internet => internet,
        _ => 0,
    }
}

pub fn convergence_bonus(
    product: &ProductDefinition,
    flags: &SaleOptionFlags,
    schedule: &BonusSchedule,
) -> Amount {
    if !flags.convergence
        || !product.flags.supports_convergence
        || !qualifying_category(product.category)
    {
        return 0;
    }
    category_amount(
        product.category,
        schedule.convergence.mobile,
        schedule.convergence.internet,
    )
}

/// Portability bonus. For internet, easy-switch triggers the same bonus;
/// ticking both still pays it once.
pub fn portability_bonus(
    product: &ProductDefinition,
    flags: &SaleOptionFlags,
    schedule: &BonusSchedule,
) -> Amount {
    let triggered = flags.portability || (product.category.is_internet() && flags.easy_switch);
    if !triggered
        || !product.flags.supports_portability
        || !qualifying_category(product.category)
    {
        return 0;
    }
    category_amount(
        product.category,
        schedule.portability.mobile,
        schedule.portability.internet,
    )
}

/// SoHo bonus, mobile medium+ only
pub fn business_bonus(
    product: &ProductDefinition,
    flags: &SaleOptionFlags,
    schedule: &BonusSchedule,
) -> Amount {
    let medium_plus = product
        .category
        .mobile_tier()
        .is_some_and(|tier| tier.is_medium_or_above());
    if flags.business_registration && medium_plus && product.flags.supports_soho {
        schedule.business_registration
    } else {
        0
    }
}

/// Energy add-ons: e-billing and direct-debit, each paid at most once
pub fn add_on_bonus(
    product: &ProductDefinition,
    flags: &SaleOptionFlags,
    schedule: &BonusSchedule,
) -> Amount {
    if !product.category.is_energy() {
        return 0;
    }
    let mut total: Amount = 0;
    if flags.e_billing {
        total = total.saturating_add(schedule.e_billing);
    }
    if flags.direct_debit {
        total = total.saturating_add(schedule.direct_debit);
    }
    total
}
