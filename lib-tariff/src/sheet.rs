//! Tariff sheet (versioned customer price catalog)

use std::collections::BTreeMap;
use std::path::Path;

use lib_types::Amount;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{TariffError, TariffResult};
use crate::plans::{InternetPlan, MobilePlan, MobileRates, PlanId, TvPlan};
use crate::STANDARD_TARIFF_VERSION;

/// Fixed (not percentage) deductions from the internet list price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discounts {
    /// At least one mobile line in the same quote as internet
    pub convergence: Amount,
    /// Internet installed at the customer's second address
    pub second_address: Amount,
}

/// Comfort (loyalty) add-on prices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComfortPricing {
    pub standard: Amount,
    /// Price when the quote includes a top-tier internet plan
    pub top_tier: Amount,
}

impl ComfortPricing {
    pub const fn price(&self, top_tier_internet: bool) -> Amount {
        if top_tier_internet {
            self.top_tier
        } else {
            self.standard
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TariffSheet {
    pub version: String,
    pub internet: BTreeMap<PlanId, InternetPlan>,
    pub mobile: BTreeMap<PlanId, MobilePlan>,
    #[serde(default)]
    pub tv: BTreeMap<PlanId, TvPlan>,
    pub discounts: Discounts,
    pub comfort: ComfortPricing,
}

impl TariffSheet {
    /// The built-in tariff sheet. Prices in cents per month.
    pub fn standard() -> Self {
        let internet = [
            ("fiber-100", 2_490, false),
            ("fiber-1000", 2_990, false),
            ("fiber-2500", 3_990, true),
        ]
        .into_iter()
        .map(|(id, list_price, top_tier)| {
            (
                PlanId::from(id),
                InternetPlan {
                    id: PlanId::from(id),
                    list_price,
                    top_tier,
                },
            )
        })
        .collect();

        let mobile = [
            ("mobile-small", 799, 699, 599),
            ("mobile-medium", 1_199, 999, 899),
            ("mobile-large", 1_499, 1_299, 1_099),
            ("mobile-unlimited", 1_999, 1_699, 1_499),
        ]
        .into_iter()
        .map(|(id, single, multi_standalone, multi_converged)| {
            (
                PlanId::from(id),
                MobilePlan {
                    id: PlanId::from(id),
                    rates: MobileRates {
                        single,
                        multi_standalone,
                        multi_converged,
                    },
                },
            )
        })
        .collect();

        let tv = [("tv-lite", 499), ("tv", 999)]
            .into_iter()
            .map(|(id, price)| {
                (
                    PlanId::from(id),
                    TvPlan {
                        id: PlanId::from(id),
                        price,
                    },
                )
            })
            .collect();

        TariffSheet {
            version: STANDARD_TARIFF_VERSION.to_string(),
            internet,
            mobile,
            tv,
            discounts: Discounts {
                convergence: 500,
                second_address: 300,
            },
            comfort: ComfortPricing {
                standard: 499,
                top_tier: 299,
            },
        }
    }

    pub fn internet_plan(&self, id: &str) -> TariffResult<&InternetPlan> {
        self.internet
            .get(id)
            .ok_or_else(|| TariffError::unknown_plan("internet", id))
    }

    pub fn mobile_plan(&self, id: &str) -> TariffResult<&MobilePlan> {
        self.mobile
            .get(id)
            .ok_or_else(|| TariffError::unknown_plan("mobile", id))
    }

    pub fn tv_plan(&self, id: &str) -> TariffResult<&TvPlan> {
        self.tv.get(id).ok_or_else(|| TariffError::unknown_plan("tv", id))
    }

    /// Parse and validate a tariff sheet from TOML
    pub fn from_toml_str(content: &str) -> TariffResult<Self> {
        let sheet: TariffSheet = toml::from_str(content)?;
        sheet.validate()?;
        debug!(version = %sheet.version, "Loaded tariff sheet");
        Ok(sheet)
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> TariffResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| TariffError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> TariffResult<()> {
        if self.version.trim().is_empty() {
            return Err(TariffError::InvalidSheet(
                "tariff version must not be empty".to_string(),
            ));
        }
        if self.internet.is_empty() || self.mobile.is_empty() {
            return Err(TariffError::InvalidSheet(format!(
                "tariff '{}' needs at least one internet and one mobile plan",
                self.version
            )));
        }
        let keys_match = self.internet.iter().all(|(key, plan)| key == &plan.id)
            && self.mobile.iter().all(|(key, plan)| key == &plan.id)
            && self.tv.iter().all(|(key, plan)| key == &plan.id);
        if !keys_match {
            return Err(TariffError::InvalidSheet(
                "every plan must be listed under its own id".to_string(),
            ));
        }
        if self.comfort.top_tier > self.comfort.standard {
            return Err(TariffError::InvalidSheet(
                "top-tier comfort price cannot exceed the standard price".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_sheet_is_valid() {
        TariffSheet::standard().validate().unwrap();
    }

    #[test]
    fn test_unknown_plan_lookup() {
        let sheet = TariffSheet::standard();
        let err = sheet.internet_plan("dsl-7").unwrap_err();
        assert_eq!(err.to_string(), "Unknown internet plan 'dsl-7'");
    }

    #[test]
    fn test_comfort_price_by_tier() {
        let comfort = TariffSheet::standard().comfort;
        assert_eq!(comfort.price(false), 499);
        assert_eq!(comfort.price(true), 299);
    }

    #[test]
    fn test_comfort_top_tier_above_standard_rejected() {
        let mut sheet = TariffSheet::standard();
        sheet.comfort.top_tier = 999;
        assert!(matches!(sheet.validate(), Err(TariffError::InvalidSheet(_))));
    }

    #[test]
    fn test_load_sheet_from_toml() {
        let content = r#"
version = "promo-q1"

[internet.fiber-1000]
id = "fiber-1000"
list_price = 2790

[mobile.mobile-medium]
id = "mobile-medium"
rates = { single = 1099, multi_standalone = 949, multi_converged = 849 }

[discounts]
convergence = 600
second_address = 300

[comfort]
standard = 499
top_tier = 299
"#;
        let sheet = TariffSheet::from_toml_str(content).unwrap();
        assert_eq!(sheet.version, "promo-q1");
        assert_eq!(sheet.internet_plan("fiber-1000").unwrap().list_price, 2_790);
        assert!(!sheet.internet_plan("fiber-1000").unwrap().top_tier);
        assert!(sheet.tv.is_empty());
    }
}
