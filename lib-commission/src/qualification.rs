//! Qualification engine: PQS, quarterly activity, rank, milestone bonus
//!
//! Everything is a pure function of the records and dates passed in. The
//! evaluation date is always explicit; nothing reads the clock.

use chrono::{Days, NaiveDate};
use lib_catalog::{ActivityRules, Catalog, PqsRules, RankLadder};
use lib_types::{Amount, ConsultantRank, PointCategory, Points, SoldItem};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::EngineResult;
use crate::points::compute_points;

// =============================================================================
// POINT HISTORY
// =============================================================================

/// Points split by qualification bucket
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryPoints {
    pub mobile: Points,
    pub internet: Points,
    pub energy: Points,
    pub other: Points,
}

impl CategoryPoints {
    pub fn add(&mut self, category: PointCategory, points: Points) {
        let bucket = match category {
            PointCategory::Mobile => &mut self.mobile,
            PointCategory::Internet => &mut self.internet,
            PointCategory::Energy => &mut self.energy,
            PointCategory::Other => &mut self.other,
        };
        *bucket += points;
    }

    pub fn get(&self, category: PointCategory) -> Points {
        match category {
            PointCategory::Mobile => self.mobile,
            PointCategory::Internet => self.internet,
            PointCategory::Energy => self.energy,
            PointCategory::Other => self.other,
        }
    }

    pub fn total(&self) -> Points {
        self.mobile + self.internet + self.energy + self.other
    }
}

impl FromIterator<(PointCategory, Points)> for CategoryPoints {
    fn from_iter<I: IntoIterator<Item = (PointCategory, Points)>>(iter: I) -> Self {
        let mut points = CategoryPoints::default();
        for (category, value) in iter {
            points.add(category, value);
        }
        points
    }
}

/// One personally sold service, as kept by the reporting job
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRecord {
    pub category: PointCategory,
    pub points: Points,
    pub sold_on: NaiveDate,
}

impl ServiceRecord {
    /// Record for an item, with its points priced from the catalog
    pub fn from_item(catalog: &Catalog, item: &SoldItem, sold_on: NaiveDate) -> EngineResult<Self> {
        let product = catalog.lookup(item.product_id.as_str())?;
        let points = compute_points(catalog, item)?;
        Ok(Self {
            category: product.category.point_category(),
            points: points.total,
            sold_on,
        })
    }
}

/// Sum records sold within `[from, to]`
fn points_between(history: &[ServiceRecord], from: NaiveDate, to: NaiveDate) -> CategoryPoints {
    history
        .iter()
        .filter(|record| record.sold_on >= from && record.sold_on <= to)
        .map(|record| (record.category, record.points))
        .collect()
}

// =============================================================================
// PQS
// =============================================================================

/// All four minimums met at once
pub fn pqs_met(points: &CategoryPoints, rules: &PqsRules) -> bool {
    points.total() >= rules.min_total_points
        && points.mobile >= rules.min_mobile_points
        && points.energy >= rules.min_energy_points
        && points.internet >= rules.min_internet_points
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PqsOutcome {
    pub window_start: NaiveDate,
    pub window_end: NaiveDate,
    pub points: CategoryPoints,
    pub qualified: bool,
    /// Paid to the qualifying consultant; zero when not qualified
    pub bonus: Amount,
    /// Paid to the consultant's direct (depth-1) sponsor; always equals `bonus`
    pub sponsor_bonus: Amount,
}

/// PQS check over the rolling window ending on `window_end` (inclusive)
pub fn evaluate_pqs(history: &[ServiceRecord], window_end: NaiveDate, rules: &PqsRules) -> PqsOutcome {
    let span = Days::new(u64::from(rules.window_days.saturating_sub(1)));
    let window_start = window_end.checked_sub_days(span).unwrap_or(NaiveDate::MIN);
    let points = points_between(history, window_start, window_end);
    let qualified = pqs_met(&points, rules);

    debug!(
        %window_start,
        %window_end,
        total = %points.total(),
        qualified,
        "pqs evaluated"
    );

    let bonus = if qualified { rules.bonus } else { 0 };
    PqsOutcome {
        window_start,
        window_end,
        points,
        qualified,
        bonus,
        sponsor_bonus: bonus,
    }
}

// =============================================================================
// QUARTERLY ACTIVITY
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuarterActivity {
    pub personal_points: Points,
    pub pqs_events: u32,
    /// Milestones reached by direct (depth-1) recruits this quarter
    pub downline_milestones: u32,
}

/// Active if any one of the three conditions holds
pub fn is_quarter_active(activity: &QuarterActivity, rules: &ActivityRules) -> bool {
    activity.personal_points >= rules.min_personal_points
        || activity.pqs_events > 0
        || activity.downline_milestones > 0
}

// =============================================================================
// RANK
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankStanding {
    pub personal_points: Points,
    pub team_points: Points,
    pub active_legs: u32,
}

/// Highest rank whose three thresholds are all met
pub fn evaluate_rank(standing: &RankStanding, ladder: &RankLadder) -> ConsultantRank {
    ladder
        .rules()
        .iter()
        .rev()
        .find(|rule| {
            standing.personal_points >= rule.min_personal_points
                && standing.team_points >= rule.min_team_points
                && standing.active_legs >= rule.min_active_legs
        })
        .map(|rule| rule.rank)
        .unwrap_or(ConsultantRank::ENTRY)
}

/// Per-rank amount times the downline PQS events in the period
pub fn milestone_bonus(rank: ConsultantRank, downline_pqs_events: u32, ladder: &RankLadder) -> Amount {
    ladder
        .milestone_bonus(rank)
        .saturating_mul(Amount::from(downline_pqs_events))
}

// =============================================================================
// PERIOD REPORT
// =============================================================================

/// What the reporting job knows about one consultant for one period
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodInput {
    /// Personal sales; may extend before the quarter
    pub history: Vec<ServiceRecord>,
    pub quarter_start: NaiveDate,
    pub period_end: NaiveDate,
    #[serde(default)]
    pub team_points: Points,
    #[serde(default)]
    pub active_legs: u32,
    /// PQS events already recorded earlier this quarter
    #[serde(default)]
    pub prior_pqs_events: u32,
    #[serde(default)]
    pub downline_milestones: u32,
    /// PQS events anywhere in the downline this period
    #[serde(default)]
    pub downline_pqs_events: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualificationReport {
    pub catalog_version: String,
    pub rank: ConsultantRank,
    pub standing: RankStanding,
    pub pqs: PqsOutcome,
    pub activity: QuarterActivity,
    pub active: bool,
    pub milestone_bonus: Amount,
}

pub fn evaluate_period(catalog: &Catalog, input: &PeriodInput) -> QualificationReport {
    let pqs = evaluate_pqs(&input.history, input.period_end, &catalog.pqs);
    let personal_points = points_between(&input.history, input.quarter_start, input.period_end).total();

    let activity = QuarterActivity {
        personal_points,
        pqs_events: input.prior_pqs_events.saturating_add(u32::from(pqs.qualified)),
        downline_milestones: input.downline_milestones,
    };
    let standing = RankStanding {
        personal_points,
        team_points: input.team_points,
        active_legs: input.active_legs,
    };
    let rank = evaluate_rank(&standing, &catalog.ranks);

    QualificationReport {
        catalog_version: catalog.version.clone(),
        rank,
        standing,
        pqs,
        active: is_quarter_active(&activity, &catalog.activity),
        activity,
        milestone_bonus: milestone_bonus(rank, input.downline_pqs_events, &catalog.ranks),
    }
}
