//! Rank ladder thresholds and milestone amounts

use lib_types::{Amount, ConsultantRank, Points};
use serde::{Deserialize, Serialize};

use crate::errors::{CatalogError, CatalogResult};

/// Requirements and milestone amount for one rank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankRule {
    pub rank: ConsultantRank,
    pub min_personal_points: Points,
    pub min_team_points: Points,
    pub min_active_legs: u32,
    /// Paid per PQS event anywhere in the downline during the period
    pub milestone_bonus: Amount,
}

/// Rank rules, lowest rank first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RankLadder {
    rules: Vec<RankRule>,
}

impl RankLadder {
    pub fn new(mut rules: Vec<RankRule>) -> CatalogResult<Self> {
        rules.sort_by_key(|rule| rule.rank);
        let ladder = Self { rules };
        ladder.validate()?;
        Ok(ladder)
    }

    /// Ladder from rules already in ladder order; checked by `validate`
    pub(crate) fn from_ordered(rules: Vec<RankRule>) -> Self {
        Self { rules }
    }

    /// Rules in ascending rank order
    pub fn rules(&self) -> &[RankRule] {
        &self.rules
    }

    pub fn rule(&self, rank: ConsultantRank) -> Option<&RankRule> {
        self.rules.iter().find(|rule| rule.rank == rank)
    }

    /// Milestone amount for `rank`; zero for the entry rank
    pub fn milestone_bonus(&self, rank: ConsultantRank) -> Amount {
        if rank.is_entry() {
            return 0;
        }
        self.rule(rank).map(|rule| rule.milestone_bonus).unwrap_or(0)
    }

    /// Check ladder invariants
    ///
    /// - every rank appears exactly once, in ladder order
    /// - the entry rank has no thresholds and no milestone bonus
    /// - thresholds and milestone amounts never decrease up the ladder
    pub fn validate(&self) -> CatalogResult<()> {
        if self.rules.len() != ConsultantRank::ALL.len() {
            return Err(CatalogError::InvalidCatalog(format!(
                "rank ladder has {} rules, expected {}",
                self.rules.len(),
                ConsultantRank::ALL.len()
            )));
        }
        for (rule, expected) in self.rules.iter().zip(ConsultantRank::ALL) {
            if rule.rank != *expected {
                return Err(CatalogError::InvalidCatalog(format!(
                    "rank ladder is missing '{}' or lists a rank twice",
                    expected
                )));
            }
        }

        let entry = &self.rules[0];
        if entry.milestone_bonus != 0 {
            return Err(CatalogError::InvalidCatalog(format!(
                "entry rank '{}' cannot earn a milestone bonus",
                entry.rank
            )));
        }
        if !entry.min_personal_points.is_zero()
            || !entry.min_team_points.is_zero()
            || entry.min_active_legs != 0
        {
            return Err(CatalogError::InvalidCatalog(format!(
                "entry rank '{}' must have zero thresholds",
                entry.rank
            )));
        }

        for pair in self.rules.windows(2) {
            let (lower, upper) = (&pair[0], &pair[1]);
            if upper.milestone_bonus < lower.milestone_bonus {
                return Err(CatalogError::InvalidCatalog(format!(
                    "milestone bonus decreases from '{}' to '{}'",
                    lower.rank, upper.rank
                )));
            }
            if upper.min_personal_points < lower.min_personal_points
                || upper.min_team_points < lower.min_team_points
                || upper.min_active_legs < lower.min_active_legs
            {
                return Err(CatalogError::InvalidCatalog(format!(
                    "thresholds decrease from '{}' to '{}'",
                    lower.rank, upper.rank
                )));
            }
        }
        Ok(())
    }
}
