//! Deal orchestrator
//!
//! Composes the per-item calculators over a whole sale:
//!
//! 1. Resolve every product first; one unknown id fails the deal, no partial
//!    result is produced.
//! 2. Derive sale-level facts (`SaleContext`) in a pre-pass so that items
//!    never inspect their siblings.
//! 3. Price each item, aggregate, then cascade the aggregated commission base
//!    and own residual over the upline once each.

use lib_catalog::{Catalog, ProductDefinition};
use lib_tariff::{compute_quote, QuoteRequest, QuoteResult, TariffSheet};
use lib_types::{
    Amount, ConsultantRank, Points, ProductCategory, ProductId, Sale, SaleOptionFlags,
    UplineChain,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::clawback::{clawback_payouts, compute_clawback, Clawback, RecipientClawback};
use crate::commission::{commission_for_product, CommissionBreakdown};
use crate::errors::EngineResult;
use crate::points::{points_for_product, PointBreakdown};
use crate::qualification::CategoryPoints;
use crate::residual::{residual_for_product, ResidualSchedule};
use crate::upline::{distribute, UplineDistribution};

// =============================================================================
// SALE CONTEXT
// =============================================================================

/// Facts about the whole sale that individual items depend on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleContext {
    pub has_mobile: bool,
    pub has_internet: bool,
    pub mobile_lines: usize,
}

impl SaleContext {
    pub fn from_categories<I>(categories: I) -> Self
    where
        I: IntoIterator<Item = ProductCategory>,
    {
        let mut context = SaleContext::default();
        for category in categories {
            if category.is_mobile() {
                context.has_mobile = true;
                context.mobile_lines += 1;
            }
            if category.is_internet() {
                context.has_internet = true;
            }
        }
        context
    }

    /// Flags as they apply inside this sale.
    ///
    /// Convergence on a mobile item needs an internet item in the same sale,
    /// and the other way round. Without the counterpart the flag is dropped.
    pub fn effective_flags(&self, category: ProductCategory, flags: &SaleOptionFlags) -> SaleOptionFlags {
        let mut effective = *flags;
        let counterpart = match category {
            ProductCategory::Mobile(_) => self.has_internet,
            ProductCategory::Internet => self.has_mobile,
            _ => true,
        };
        if effective.convergence && !counterpart {
            debug!(%category, "convergence flag without counterpart item");
            effective.convergence = false;
        }
        effective
    }
}

// =============================================================================
// RESULT
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemResult {
    pub product_id: ProductId,
    pub category: ProductCategory,
    /// Flags after the sale-level pre-pass
    pub flags: SaleOptionFlags,
    pub commission: CommissionBreakdown,
    pub points: PointBreakdown,
    pub residual: ResidualSchedule,
}

/// Consolidated outcome of one sale for one seller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommissionResult {
    pub catalog_version: String,
    pub rank: ConsultantRank,
    pub items: Vec<ItemResult>,
    /// Sum of item bases; the only part that cascades
    pub base_total: Amount,
    pub bonus_total: Amount,
    /// Grand total, base plus bonuses
    pub commission_total: Amount,
    pub points_total: Points,
    pub points_by_category: CategoryPoints,
    /// Catalog residual buckets summed over items. `own` is the monthly base
    /// that `residual_upline` cascades; the depth buckets are catalog
    /// reference figures only, and what each sponsor is actually paid is in
    /// `residual_upline.payouts`.
    pub residual_schedule: ResidualSchedule,
    pub commission_upline: UplineDistribution,
    /// Percentage cascade of `residual_schedule.own`
    pub residual_upline: UplineDistribution,
    /// Commission kept by the seller after upline payouts
    pub seller_net_commission: Amount,
    /// Monthly residual kept by the seller after upline payouts
    pub seller_net_residual: Amount,
    pub seller_net: Amount,
}

pub fn compute_deal(
    catalog: &Catalog,
    sale: &Sale,
    rank: ConsultantRank,
    upline: &UplineChain,
) -> EngineResult<CommissionResult> {
    let products = sale
        .items
        .iter()
        .map(|item| catalog.lookup(item.product_id.as_str()))
        .collect::<Result<Vec<&ProductDefinition>, _>>()?;

    let context = SaleContext::from_categories(products.iter().map(|product| product.category));

    let mut items = Vec::with_capacity(products.len());
    let mut base_total: Amount = 0;
    let mut bonus_total: Amount = 0;
    let mut points_total = Points::ZERO;
    let mut points_by_category = CategoryPoints::default();
    let mut residual_schedule = ResidualSchedule::ZERO;

    for (item, product) in sale.items.iter().zip(&products) {
        let flags = context.effective_flags(product.category, &item.flags);
        let commission = commission_for_product(product, &flags, rank, &catalog.bonuses);
        let points = points_for_product(product, &flags, &catalog.bonuses);
        let item_residual = residual_for_product(product);

        base_total = base_total.saturating_add(commission.base);
        bonus_total = bonus_total.saturating_add(commission.bonuses());
        points_total += points.total;
        points_by_category.add(product.category.point_category(), points.total);
        residual_schedule += item_residual;

        items.push(ItemResult {
            product_id: product.id.clone(),
            category: product.category,
            flags,
            commission,
            points,
            residual: item_residual,
        });
    }

    let commission_total = base_total.saturating_add(bonus_total);
    let commission_upline = distribute(base_total, upline);
    let residual_upline = distribute(residual_schedule.own, upline);

    let seller_net_commission = commission_total.saturating_sub(commission_upline.distributed);
    let seller_net_residual = residual_schedule.own.saturating_sub(residual_upline.distributed);

    info!(
        catalog = %catalog.version,
        %rank,
        items = items.len(),
        commission_total,
        upline = upline.len(),
        "deal computed"
    );

    Ok(CommissionResult {
        catalog_version: catalog.version.clone(),
        rank,
        items,
        base_total,
        bonus_total,
        commission_total,
        points_total,
        points_by_category,
        residual_schedule,
        commission_upline,
        residual_upline,
        seller_net_commission,
        seller_net_residual,
        seller_net: seller_net_commission.saturating_add(seller_net_residual),
    })
}

// =============================================================================
// OFFER
// =============================================================================

/// Commission for the seller and price for the customer, from one request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferResult {
    pub commission: CommissionResult,
    pub quote: QuoteResult,
}

/// Deal and quote together; either failing fails the offer
pub fn compute_offer(
    catalog: &Catalog,
    sheet: &TariffSheet,
    sale: &Sale,
    rank: ConsultantRank,
    upline: &UplineChain,
    request: &QuoteRequest,
) -> EngineResult<OfferResult> {
    let quote = compute_quote(sheet, request)?;
    let commission = compute_deal(catalog, sale, rank, upline)?;
    Ok(OfferResult { commission, quote })
}

// =============================================================================
// CLAWBACK
// =============================================================================

/// Clawback of a computed deal after early cancellation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealClawback {
    /// On the seller's net commission
    pub seller: Clawback,
    /// On each upline payout, individually
    pub upline: Vec<RecipientClawback>,
    pub total_reclaimed: Amount,
}

pub fn clawback_deal(result: &CommissionResult, months_active: f64) -> DealClawback {
    let seller = compute_clawback(result.seller_net_commission, months_active);
    let upline = clawback_payouts(&result.commission_upline.payouts, months_active);
    let total_reclaimed = upline
        .iter()
        .fold(seller.reclaimed, |acc, recipient| acc.saturating_add(recipient.clawback.reclaimed));
    DealClawback {
        seller,
        upline,
        total_reclaimed,
    }
}
