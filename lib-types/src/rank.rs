//! Consultant rank ladder.
//!
//! One enumeration serves two groupings: the two-class commission split
//! (`CommissionTier`) and the full ladder used for qualification and
//! milestone bonuses. Thresholds and milestone amounts are versioned data
//! and live in the catalog's rank rules.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::TypesError;

/// Commission rate class of a rank
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommissionTier {
    /// Entry rank rates
    Entry,
    /// Senior-and-above rates
    Senior,
}

/// Named ranks, lowest first. `Ord` follows the ladder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsultantRank {
    Consultant,
    SeniorConsultant,
    TeamLeader,
    Manager,
    SeniorManager,
    Director,
    ExecutiveDirector,
}

impl ConsultantRank {
    /// Entry rank of the ladder
    pub const ENTRY: ConsultantRank = ConsultantRank::Consultant;

    /// All ranks, lowest first
    pub const ALL: &'static [ConsultantRank] = &[
        ConsultantRank::Consultant,
        ConsultantRank::SeniorConsultant,
        ConsultantRank::TeamLeader,
        ConsultantRank::Manager,
        ConsultantRank::SeniorManager,
        ConsultantRank::Director,
        ConsultantRank::ExecutiveDirector,
    ];

    /// Stable identifier used in configuration and inputs
    pub const fn id(self) -> &'static str {
        match self {
            ConsultantRank::Consultant => "consultant",
            ConsultantRank::SeniorConsultant => "senior_consultant",
            ConsultantRank::TeamLeader => "team_leader",
            ConsultantRank::Manager => "manager",
            ConsultantRank::SeniorManager => "senior_manager",
            ConsultantRank::Director => "director",
            ConsultantRank::ExecutiveDirector => "executive_director",
        }
    }

    pub const fn is_entry(self) -> bool {
        matches!(self, ConsultantRank::Consultant)
    }

    /// Commission class: entry rank versus everyone above it
    pub const fn commission_tier(self) -> CommissionTier {
        if self.is_entry() {
            CommissionTier::Entry
        } else {
            CommissionTier::Senior
        }
    }
}

impl FromStr for ConsultantRank {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConsultantRank::ALL
            .iter()
            .copied()
            .find(|rank| rank.id() == s)
            .ok_or_else(|| TypesError::UnknownRank(s.to_string()))
    }
}

impl fmt::Display for ConsultantRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
