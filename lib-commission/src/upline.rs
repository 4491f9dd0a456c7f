//! Upline distribution engine
//!
//! Cascades a base amount across the sponsor chain by fixed percentages:
//!
//! | Depth | Share |
//! |-------|-------|
//! | 1     | 10%   |
//! | 2     | 5%    |
//! | 3     | 5%    |
//! | 4     | 3%    |
//! | 5     | 2%    |
//! | 6     | 1%    |
//! | 7     | 1%    |
//!
//! Used twice per deal, independently: once on the commission base, once on
//! the own residual. Bonuses and points never enter the cascade.
//!
//! A vacant depth is not redistributed; whatever is not paid out stays with
//! the seller. Each payout is rounded half away from zero on its own, and
//! `distributed + retained == base` always holds.

use lib_types::{Amount, Bps, ConsultantId, UplineChain, MAX_UPLINE_DEPTH};
use serde::{Deserialize, Serialize};

use crate::arithmetic::share_of;

/// Share per depth, index 0 = depth 1
pub const UPLINE_SHARES_BPS: [Bps; MAX_UPLINE_DEPTH as usize] = [1_000, 500, 500, 300, 200, 100, 100];

/// Sum of all depth shares (a full chain)
pub const UPLINE_TOTAL_BPS: Bps = 2_700;

/// Share for a depth; 0 outside `1..=7`
pub const fn share_for_depth(depth: u8) -> Bps {
    if depth == 0 || depth > MAX_UPLINE_DEPTH {
        return 0;
    }
    UPLINE_SHARES_BPS[(depth - 1) as usize]
}

/// One sponsor's cut
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UplinePayout {
    pub depth: u8,
    pub consultant: ConsultantId,
    pub share_bps: Bps,
    pub amount: Amount,
}

/// Result of cascading one base amount
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UplineDistribution {
    pub base: Amount,
    /// One record per filled depth, ascending
    pub payouts: Vec<UplinePayout>,
    pub distributed: Amount,
    pub distributed_bps: Bps,
    /// Part of the base the seller keeps
    pub retained: Amount,
}

impl UplineDistribution {
    pub fn payout_at(&self, depth: u8) -> Option<&UplinePayout> {
        self.payouts.iter().find(|payout| payout.depth == depth)
    }
}

/// Cascade `base` over `chain`
pub fn distribute(base: Amount, chain: &UplineChain) -> UplineDistribution {
    let mut payouts = Vec::with_capacity(chain.len());
    let mut distributed: Amount = 0;
    let mut distributed_bps: Bps = 0;

    for entry in chain.entries() {
        let share_bps = share_for_depth(entry.depth);
        let amount = share_of(base, share_bps);
        distributed = distributed.saturating_add(amount);
        distributed_bps = distributed_bps.saturating_add(share_bps);
        payouts.push(UplinePayout {
            depth: entry.depth,
            consultant: entry.consultant.clone(),
            share_bps,
            amount,
        });
    }

    UplineDistribution {
        base,
        payouts,
        distributed,
        distributed_bps,
        retained: base.saturating_sub(distributed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib_types::UplineEntry;

    fn chain(len: usize) -> UplineChain {
        UplineChain::from_sponsors((1..=len).map(|i| format!("sponsor-{i}"))).unwrap()
    }

    #[test]
    fn test_share_table() {
        let total: u32 = UPLINE_SHARES_BPS.iter().map(|&bps| bps as u32).sum();
        assert_eq!(total, UPLINE_TOTAL_BPS as u32);
        assert_eq!(share_for_depth(0), 0);
        assert_eq!(share_for_depth(1), 1_000);
        assert_eq!(share_for_depth(7), 100);
        assert_eq!(share_for_depth(8), 0);
    }

    #[test]
    fn test_empty_chain_seller_keeps_all() {
        let result = distribute(6_500, &UplineChain::empty());
        assert!(result.payouts.is_empty());
        assert_eq!(result.distributed, 0);
        assert_eq!(result.distributed_bps, 0);
        assert_eq!(result.retained, 6_500);
    }

    #[test]
    fn test_full_chain() {
        let result = distribute(6_500, &chain(7));
        let amounts: Vec<Amount> = result.payouts.iter().map(|p| p.amount).collect();
        assert_eq!(amounts, vec![650, 325, 325, 195, 130, 65, 65]);
        assert_eq!(result.distributed, 1_755);
        assert_eq!(result.distributed_bps, UPLINE_TOTAL_BPS);
        assert_eq!(result.retained, 4_745);
    }

    #[test]
    fn test_short_chain_is_not_redistributed() {
        let result = distribute(10_000, &chain(2));
        assert_eq!(result.distributed, 1_500);
        assert_eq!(result.distributed_bps, 1_500);
        assert_eq!(result.retained, 8_500);
    }

    #[test]
    fn test_gap_in_chain() {
        let chain = UplineChain::new(vec![
            UplineEntry {
                depth: 1,
                consultant: "alice".into(),
            },
            UplineEntry {
                depth: 3,
                consultant: "carol".into(),
            },
        ])
        .unwrap();
        let result = distribute(1_000, &chain);
        assert_eq!(result.payouts.len(), 2);
        assert!(result.payout_at(2).is_none());
        assert_eq!(result.payout_at(3).unwrap().amount, 50);
        assert_eq!(result.distributed + result.retained, 1_000);
    }

    #[test]
    fn test_per_payout_rounding() {
        let result = distribute(350, &chain(7));
        let amounts: Vec<Amount> = result.payouts.iter().map(|p| p.amount).collect();
        assert_eq!(amounts, vec![35, 18, 18, 11, 7, 4, 4]);
        assert_eq!(result.retained, 253);
    }
}
