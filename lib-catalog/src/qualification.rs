//! Qualification thresholds (PQS, quarterly activity)

use lib_types::{Amount, Points};
use serde::{Deserialize, Serialize};

/// Balanced-points milestone (PQS) requirements.
///
/// All minimums must hold simultaneously inside one rolling window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PqsRules {
    /// Window length in days, ending on the evaluation date inclusive
    pub window_days: u32,
    pub min_total_points: Points,
    pub min_mobile_points: Points,
    pub min_energy_points: Points,
    pub min_internet_points: Points,
    /// Paid once to the qualifying consultant and once, in the same amount,
    /// to their direct sponsor
    pub bonus: Amount,
}

/// Quarterly activity requirement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRules {
    /// Personal points in the quarter that alone make a consultant active
    pub min_personal_points: Points,
}
