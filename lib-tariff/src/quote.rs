//! Quote computation (pure function)
//!
//! # Algorithm
//!
//! ```text
//! sheet        = Single if lines < 2
//!                else MultiConverged if internet else MultiStandalone
//! line_price   = plan.rates[sheet]                 (every line, same sheet)
//! internet     = list - convergence(if lines >= 1) - second_address(if flagged)
//! comfort      = comfort.top_tier if internet.top_tier else comfort.standard
//! total        = sum(lines) + internet + tv + comfort
//! savings[h]   = (current - total) * h            for h in {6, 24}
//! ```

use lib_types::{Amount, SignedAmount};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::TariffResult;
use crate::plans::{PlanId, RateSheet};
use crate::sheet::TariffSheet;

/// Projection horizons for the savings estimate, in months
pub const SAVINGS_HORIZONS_MONTHS: [i64; 2] = [6, 24];

/// What the customer wants priced
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuoteRequest {
    pub internet: Option<PlanId>,
    pub mobile_lines: Vec<PlanId>,
    pub tv: Option<PlanId>,
    /// Internet is installed at a second address of an existing customer
    pub second_address: bool,
    /// Comfort (loyalty) add-on requested
    pub comfort: bool,
    /// Customer's self-reported current monthly cost
    pub current_monthly_cost: Option<Amount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InternetQuote {
    pub plan: PlanId,
    pub list_price: Amount,
    pub convergence_discount: Amount,
    pub second_address_discount: Amount,
    /// Monthly price after discounts, never below zero
    pub price: Amount,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MobileLineQuote {
    pub plan: PlanId,
    pub rate_sheet: RateSheet,
    pub price: Amount,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TvQuote {
    pub plan: PlanId,
    pub price: Amount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComfortQuote {
    pub price: Amount,
    /// Priced at the top-tier discount
    pub discounted: bool,
}

/// Savings against the customer's current cost; negative means the offer
/// costs more
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsProjection {
    pub current_monthly_cost: Amount,
    pub monthly_delta: SignedAmount,
    pub six_months: SignedAmount,
    pub twenty_four_months: SignedAmount,
}

impl SavingsProjection {
    pub fn project(current_monthly_cost: Amount, new_monthly_cost: Amount) -> Self {
        let monthly_delta = to_signed(current_monthly_cost).saturating_sub(to_signed(new_monthly_cost));
        let [six, twenty_four] = SAVINGS_HORIZONS_MONTHS.map(|h| monthly_delta.saturating_mul(h));
        Self {
            current_monthly_cost,
            monthly_delta,
            six_months: six,
            twenty_four_months: twenty_four,
        }
    }
}

fn to_signed(amount: Amount) -> SignedAmount {
    SignedAmount::try_from(amount).unwrap_or(SignedAmount::MAX)
}

/// Priced offer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteResult {
    pub sheet_version: String,
    pub rate_sheet: RateSheet,
    pub internet: Option<InternetQuote>,
    pub mobile_lines: Vec<MobileLineQuote>,
    pub tv: Option<TvQuote>,
    pub comfort: Option<ComfortQuote>,
    pub monthly_total: Amount,
    pub savings: Option<SavingsProjection>,
}

/// Price a quote request against a tariff sheet
///
/// Every referenced plan must exist; an unknown plan fails the whole quote.
pub fn compute_quote(sheet: &TariffSheet, request: &QuoteRequest) -> TariffResult<QuoteResult> {
    let has_internet = request.internet.is_some();
    let rate_sheet = RateSheet::for_quote(request.mobile_lines.len(), has_internet);

    let mobile_lines = request
        .mobile_lines
        .iter()
        .map(|id| {
            let plan = sheet.mobile_plan(id.as_str())?;
            Ok(MobileLineQuote {
                plan: plan.id.clone(),
                rate_sheet,
                price: plan.rates.price(rate_sheet),
            })
        })
        .collect::<TariffResult<Vec<_>>>()?;

    let internet = match &request.internet {
        Some(id) => {
            let plan = sheet.internet_plan(id.as_str())?;
            let convergence_discount = if mobile_lines.is_empty() {
                0
            } else {
                sheet.discounts.convergence
            };
            let second_address_discount = if request.second_address {
                sheet.discounts.second_address
            } else {
                0
            };
            let price = plan
                .list_price
                .saturating_sub(convergence_discount)
                .saturating_sub(second_address_discount);
            Some(InternetQuote {
                plan: plan.id.clone(),
                list_price: plan.list_price,
                convergence_discount,
                second_address_discount,
                price,
            })
        }
        None => None,
    };

    let tv = match &request.tv {
        Some(id) => {
            let plan = sheet.tv_plan(id.as_str())?;
            Some(TvQuote {
                plan: plan.id.clone(),
                price: plan.price,
            })
        }
        None => None,
    };

    let top_tier_internet = match &request.internet {
        Some(id) => sheet.internet_plan(id.as_str())?.top_tier,
        None => false,
    };
    let comfort = request.comfort.then(|| ComfortQuote {
        price: sheet.comfort.price(top_tier_internet),
        discounted: top_tier_internet,
    });

    let monthly_total = mobile_lines
        .iter()
        .map(|line| line.price)
        .chain(internet.iter().map(|quote| quote.price))
        .chain(tv.iter().map(|quote| quote.price))
        .chain(comfort.iter().map(|quote| quote.price))
        .fold(0, Amount::saturating_add);

    let savings = request
        .current_monthly_cost
        .map(|current| SavingsProjection::project(current, monthly_total));

    debug!(
        version = %sheet.version,
        lines = mobile_lines.len(),
        ?rate_sheet,
        monthly_total,
        "Computed quote"
    );

    Ok(QuoteResult {
        sheet_version: sheet.version.clone(),
        rate_sheet,
        internet,
        mobile_lines,
        tv,
        comfort,
        monthly_total,
        savings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::TariffError;

    fn lines(ids: &[&str]) -> Vec<PlanId> {
        ids.iter().map(|id| PlanId::from(*id)).collect()
    }

    #[test]
    fn test_two_medium_lines_without_internet() {
        let sheet = TariffSheet::standard();
        let request = QuoteRequest {
            mobile_lines: lines(&["mobile-medium", "mobile-medium"]),
            ..QuoteRequest::default()
        };
        let quote = compute_quote(&sheet, &request).unwrap();

        assert_eq!(quote.rate_sheet, RateSheet::MultiStandalone);
        for line in &quote.mobile_lines {
            assert_eq!(line.rate_sheet, RateSheet::MultiStandalone);
            assert_eq!(line.price, 999);
        }
        assert_eq!(quote.monthly_total, 1_998);
    }

    #[test]
    fn test_two_lines_with_internet_use_converged_sheet() {
        let sheet = TariffSheet::standard();
        let request = QuoteRequest {
            internet: Some(PlanId::from("fiber-100")),
            mobile_lines: lines(&["mobile-large", "mobile-small"]),
            ..QuoteRequest::default()
        };
        let quote = compute_quote(&sheet, &request).unwrap();

        let prices: Vec<Amount> = quote.mobile_lines.iter().map(|l| l.price).collect();
        assert_eq!(prices, vec![1_099, 599]);
        assert_eq!(quote.internet.as_ref().unwrap().price, 2_490 - 500);
        assert_eq!(quote.monthly_total, 1_099 + 599 + 1_990);
    }

    #[test]
    fn test_single_line_keeps_single_sheet_with_internet() {
        let sheet = TariffSheet::standard();
        let request = QuoteRequest {
            internet: Some(PlanId::from("fiber-1000")),
            mobile_lines: lines(&["mobile-medium"]),
            ..QuoteRequest::default()
        };
        let quote = compute_quote(&sheet, &request).unwrap();
        assert_eq!(quote.mobile_lines[0].rate_sheet, RateSheet::Single);
        assert_eq!(quote.mobile_lines[0].price, 1_199);
    }

    #[test]
    fn test_convergence_and_second_address_stack() {
        let sheet = TariffSheet::standard();
        let mut request = QuoteRequest {
            internet: Some(PlanId::from("fiber-1000")),
            mobile_lines: lines(&["mobile-medium"]),
            ..QuoteRequest::default()
        };

        let converged = compute_quote(&sheet, &request).unwrap();
        let internet = converged.internet.unwrap();
        assert_eq!(internet.list_price, 2_990);
        assert_eq!(internet.convergence_discount, 500);
        assert_eq!(internet.price, 2_490);

        request.second_address = true;
        let stacked = compute_quote(&sheet, &request).unwrap();
        let internet = stacked.internet.unwrap();
        assert_eq!(internet.second_address_discount, 300);
        assert_eq!(internet.price, 2_190);
    }

    #[test]
    fn test_internet_alone_has_no_convergence_discount() {
        let sheet = TariffSheet::standard();
        let request = QuoteRequest {
            internet: Some(PlanId::from("fiber-1000")),
            ..QuoteRequest::default()
        };
        let quote = compute_quote(&sheet, &request).unwrap();
        assert_eq!(quote.internet.unwrap().price, 2_990);
    }

    #[test]
    fn test_discounts_never_go_below_zero() {
        let mut sheet = TariffSheet::standard();
        sheet.discounts.convergence = 10_000;
        let request = QuoteRequest {
            internet: Some(PlanId::from("fiber-100")),
            mobile_lines: lines(&["mobile-small"]),
            second_address: true,
            ..QuoteRequest::default()
        };
        let quote = compute_quote(&sheet, &request).unwrap();
        assert_eq!(quote.internet.unwrap().price, 0);
    }

    #[test]
    fn test_comfort_discounted_only_on_top_tier() {
        let sheet = TariffSheet::standard();
        let mut request = QuoteRequest {
            internet: Some(PlanId::from("fiber-2500")),
            comfort: true,
            ..QuoteRequest::default()
        };
        let top = compute_quote(&sheet, &request).unwrap().comfort.unwrap();
        assert_eq!(top, ComfortQuote { price: 299, discounted: true });

        request.internet = Some(PlanId::from("fiber-1000"));
        let mid = compute_quote(&sheet, &request).unwrap().comfort.unwrap();
        assert_eq!(mid, ComfortQuote { price: 499, discounted: false });

        request.internet = None;
        let standalone = compute_quote(&sheet, &request).unwrap().comfort.unwrap();
        assert_eq!(standalone.price, 499);
    }

    #[test]
    fn test_savings_projection_may_be_negative() {
        let sheet = TariffSheet::standard();
        let mut request = QuoteRequest {
            internet: Some(PlanId::from("fiber-1000")),
            current_monthly_cost: Some(4_000),
            ..QuoteRequest::default()
        };
        let savings = compute_quote(&sheet, &request).unwrap().savings.unwrap();
        assert_eq!(savings.monthly_delta, 1_010);
        assert_eq!(savings.six_months, 6_060);
        assert_eq!(savings.twenty_four_months, 24_240);

        request.current_monthly_cost = Some(2_000);
        let savings = compute_quote(&sheet, &request).unwrap().savings.unwrap();
        assert_eq!(savings.monthly_delta, -990);
        assert_eq!(savings.six_months, -5_940);
        assert_eq!(savings.twenty_four_months, -23_760);
    }

    #[test]
    fn test_no_savings_without_current_cost() {
        let sheet = TariffSheet::standard();
        let request = QuoteRequest {
            mobile_lines: lines(&["mobile-small"]),
            ..QuoteRequest::default()
        };
        assert!(compute_quote(&sheet, &request).unwrap().savings.is_none());
    }

    #[test]
    fn test_unknown_plan_fails_whole_quote() {
        let sheet = TariffSheet::standard();
        let request = QuoteRequest {
            internet: Some(PlanId::from("fiber-1000")),
            mobile_lines: lines(&["mobile-medium", "mobile-galactic"]),
            ..QuoteRequest::default()
        };
        let err = compute_quote(&sheet, &request).unwrap_err();
        assert!(matches!(err, TariffError::UnknownPlan { kind: "mobile", ref id } if id == "mobile-galactic"));
    }
}
