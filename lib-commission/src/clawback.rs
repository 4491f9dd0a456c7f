//! Clawback / retention engine
//!
//! Pure function of the amount paid and the months a service stayed active.
//!
//! | Months active | Reclaimed | Retained |
//! |---------------|-----------|----------|
//! | < 1           | 100%      | 0%       |
//! | [1, 6)        | 75%       | 25%      |
//! | >= 6          | 25%       | 75%      |
//!
//! `retained` is always `amount_paid - reclaimed`, so the two sum exactly to
//! the amount paid. Upline recipients are clawed back individually on what
//! each one received; nothing is re-cascaded.

use chrono::{Datelike, NaiveDate};
use lib_types::{Amount, Bps, ConsultantId};
use serde::{Deserialize, Serialize};

use crate::arithmetic::share_of;
use crate::upline::UplinePayout;

/// Elapsed-time bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClawbackWindow {
    /// Under one month
    FirstMonth,
    /// One to six months
    EarlyTerm,
    /// Six months or more
    Matured,
}

impl ClawbackWindow {
    /// Bucket for `months_active`
    ///
    /// Anything that is not at least 1.0 (including negative values and NaN)
    /// falls in the first month.
    pub fn for_months(months_active: f64) -> Self {
        if months_active >= 6.0 {
            ClawbackWindow::Matured
        } else if months_active >= 1.0 {
            ClawbackWindow::EarlyTerm
        } else {
            ClawbackWindow::FirstMonth
        }
    }

    pub const fn reclaim_bps(self) -> Bps {
        match self {
            ClawbackWindow::FirstMonth => 10_000,
            ClawbackWindow::EarlyTerm => 7_500,
            ClawbackWindow::Matured => 2_500,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clawback {
    pub amount_paid: Amount,
    pub window: ClawbackWindow,
    pub reclaimed: Amount,
    pub retained: Amount,
}

pub fn compute_clawback(amount_paid: Amount, months_active: f64) -> Clawback {
    let window = ClawbackWindow::for_months(months_active);
    let reclaimed = share_of(amount_paid, window.reclaim_bps());
    Clawback {
        amount_paid,
        window,
        reclaimed,
        retained: amount_paid - reclaimed,
    }
}

/// Clawback for one upline recipient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipientClawback {
    pub depth: u8,
    pub consultant: ConsultantId,
    pub clawback: Clawback,
}

/// Claw back each upline payout on the amount that recipient received
pub fn clawback_payouts(payouts: &[UplinePayout], months_active: f64) -> Vec<RecipientClawback> {
    payouts
        .iter()
        .map(|payout| RecipientClawback {
            depth: payout.depth,
            consultant: payout.consultant.clone(),
            clawback: compute_clawback(payout.amount, months_active),
        })
        .collect()
}

/// Whole calendar months from `activated_on` to `cancelled_on`
///
/// A month counts once the day of month is reached again (Jan 15 to Feb 15
/// is 1, Jan 15 to Feb 14 is 0). A cancellation before activation is 0.
pub fn whole_months_between(activated_on: NaiveDate, cancelled_on: NaiveDate) -> u32 {
    if cancelled_on <= activated_on {
        return 0;
    }
    let years = cancelled_on.year() - activated_on.year();
    let mut months = years * 12 + cancelled_on.month() as i32 - activated_on.month() as i32;
    if cancelled_on.day() < activated_on.day() {
        months -= 1;
    }
    u32::try_from(months).unwrap_or(0)
}
