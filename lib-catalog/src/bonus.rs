//! Bonus amounts and extra points.
//!
//! Amounts only. The predicates deciding when a bonus applies live in
//! `lib-commission::bonus`.

use lib_types::{Amount, Points};
use serde::{Deserialize, Serialize};

/// A bonus that differs between mobile and internet products
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryBonus {
    pub mobile: Amount,
    pub internet: Amount,
}

/// Rank-independent bonus schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusSchedule {
    /// Mobile (medium+) or internet sold with convergence
    pub convergence: CategoryBonus,
    /// Number portability (mobile) or portability / easy-switch (internet)
    pub portability: CategoryBonus,
    /// SoHo customer on a medium+ mobile plan
    pub business_registration: Amount,
    /// Energy paperless billing add-on
    pub e_billing: Amount,
    /// Energy direct-debit add-on
    pub direct_debit: Amount,
    /// Extra points for SoHo on a qualifying mobile plan
    pub business_registration_points: Points,
    /// Extra points for easy-switch on internet
    pub easy_switch_points: Points,
}
