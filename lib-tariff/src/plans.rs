//! Customer-facing plans and rate sheets

use lib_types::Amount;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Tariff plan identifier (e.g. `fiber-1000`)
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlanId(String);

impl PlanId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PlanId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Borrow<str> for PlanId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which price column a mobile line is billed from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateSheet {
    /// Exactly one mobile line in the quote
    Single,
    /// Two or more lines, no internet
    MultiStandalone,
    /// Two or more lines together with internet
    MultiConverged,
}

impl RateSheet {
    /// Sheet applying to every line of a quote
    pub const fn for_quote(mobile_lines: usize, has_internet: bool) -> Self {
        if mobile_lines < 2 {
            RateSheet::Single
        } else if has_internet {
            RateSheet::MultiConverged
        } else {
            RateSheet::MultiStandalone
        }
    }
}

/// Monthly price of a mobile plan per rate sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MobileRates {
    pub single: Amount,
    pub multi_standalone: Amount,
    pub multi_converged: Amount,
}

impl MobileRates {
    pub const fn price(&self, sheet: RateSheet) -> Amount {
        match sheet {
            RateSheet::Single => self.single,
            RateSheet::MultiStandalone => self.multi_standalone,
            RateSheet::MultiConverged => self.multi_converged,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MobilePlan {
    pub id: PlanId,
    pub rates: MobileRates,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InternetPlan {
    pub id: PlanId,
    /// Monthly list price before discounts
    pub list_price: Amount,
    /// Top tier gets the discounted comfort add-on
    #[serde(default)]
    pub top_tier: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TvPlan {
    pub id: PlanId,
    pub price: Amount,
}
