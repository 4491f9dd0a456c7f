//! Per-product catalog records

use lib_types::{Amount, CommissionTier, Points, ProductCategory, ProductId};
use serde::{Deserialize, Serialize};

/// One-time commission by commission tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommissionRates {
    /// Paid to the entry rank
    pub entry: Amount,
    /// Paid to senior-and-above ranks
    pub senior: Amount,
}

impl CommissionRates {
    pub const fn for_tier(&self, tier: CommissionTier) -> Amount {
        match tier {
            CommissionTier::Entry => self.entry,
            CommissionTier::Senior => self.senior,
        }
    }
}

/// Monthly residual (fidelity) per upline depth bucket
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResidualRates {
    /// Seller's own monthly residual
    pub own: Amount,
    /// Direct sponsor
    pub depth1: Amount,
    /// Each sponsor at depths 2 through 6
    pub depth2_to_6: Amount,
    /// Sponsor at depth 7
    pub depth7: Amount,
}

impl ResidualRates {
    pub const ZERO: ResidualRates = ResidualRates {
        own: 0,
        depth1: 0,
        depth2_to_6: 0,
        depth7: 0,
    };

    pub const fn is_zero(&self) -> bool {
        self.own == 0 && self.depth1 == 0 && self.depth2_to_6 == 0 && self.depth7 == 0
    }
}

/// Eligibility switches for a product
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductFlags {
    pub supports_portability: bool,
    pub supports_convergence: bool,
    pub supports_soho: bool,
    pub generates_residual: bool,
}

/// Immutable catalog record for one product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDefinition {
    pub id: ProductId,
    pub category: ProductCategory,
    pub commission: CommissionRates,
    pub points: Points,
    #[serde(default)]
    pub residual: ResidualRates,
    #[serde(default)]
    pub flags: ProductFlags,
}

impl ProductDefinition {
    /// Commission rate for the given tier class
    pub const fn commission_rate(&self, tier: CommissionTier) -> Amount {
        self.commission.for_tier(tier)
    }

    /// Residual rates honoring `generates_residual`
    ///
    /// A product that does not generate residual yields zero at every depth,
    /// whatever its rate record says.
    pub const fn effective_residual(&self) -> ResidualRates {
        if self.flags.generates_residual {
            self.residual
        } else {
            ResidualRates::ZERO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib_types::MobileTier;

    fn product(generates_residual: bool) -> ProductDefinition {
        ProductDefinition {
            id: ProductId::from("mobile-medium"),
            category: ProductCategory::Mobile(MobileTier::Medium),
            commission: CommissionRates {
                entry: 2_000,
                senior: 2_500,
            },
            points: Points::ONE,
            residual: ResidualRates {
                own: 100,
                depth1: 40,
                depth2_to_6: 20,
                depth7: 10,
            },
            flags: ProductFlags {
                generates_residual,
                ..ProductFlags::default()
            },
        }
    }

    #[test]
    fn test_commission_rate_by_tier() {
        let p = product(true);
        assert_eq!(p.commission_rate(CommissionTier::Entry), 2_000);
        assert_eq!(p.commission_rate(CommissionTier::Senior), 2_500);
    }

    #[test]
    fn test_residual_forced_to_zero() {
        assert!(product(false).effective_residual().is_zero());
        assert_eq!(product(true).effective_residual().own, 100);
    }
}
