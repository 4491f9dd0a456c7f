//! Built-in catalog version.
//!
//! Money in cents, points in hundredths.

use std::collections::BTreeMap;

use lib_types::{Amount, ConsultantRank, MobileTier, Points, ProductCategory, ProductId};

use crate::bonus::{BonusSchedule, CategoryBonus};
use crate::catalog::Catalog;
use crate::product::{CommissionRates, ProductDefinition, ProductFlags, ResidualRates};
use crate::qualification::{ActivityRules, PqsRules};
use crate::ranks::{RankLadder, RankRule};
use crate::STANDARD_CATALOG_VERSION;

const BONUS_TIER: ProductFlags = ProductFlags {
    supports_portability: true,
    supports_convergence: true,
    supports_soho: true,
    generates_residual: true,
};

const RESIDUAL_ONLY: ProductFlags = ProductFlags {
    supports_portability: false,
    supports_convergence: false,
    supports_soho: false,
    generates_residual: true,
};

const NO_OPTIONS: ProductFlags = ProductFlags {
    supports_portability: false,
    supports_convergence: false,
    supports_soho: false,
    generates_residual: false,
};

fn residual(own: Amount, depth1: Amount, depth2_to_6: Amount, depth7: Amount) -> ResidualRates {
    ResidualRates {
        own,
        depth1,
        depth2_to_6,
        depth7,
    }
}

fn product(
    id: &str,
    category: ProductCategory,
    (entry, senior): (Amount, Amount),
    points: u32,
    residual: ResidualRates,
    flags: ProductFlags,
) -> ProductDefinition {
    ProductDefinition {
        id: ProductId::from(id),
        category,
        commission: CommissionRates { entry, senior },
        points: Points::from_hundredths(points),
        residual,
        flags,
    }
}

fn rank(
    rank: ConsultantRank,
    personal: u32,
    team: u32,
    legs: u32,
    milestone_bonus: Amount,
) -> RankRule {
    RankRule {
        rank,
        min_personal_points: Points::whole(personal),
        min_team_points: Points::whole(team),
        min_active_legs: legs,
        milestone_bonus,
    }
}

impl Catalog {
    /// The built-in catalog version
    pub fn standard() -> Self {
        use MobileTier::*;
        use ProductCategory::*;

        let products = vec![
            product("mobile-child", Mobile(Child), (500, 700), 50, ResidualRates::ZERO, NO_OPTIONS),
            product(
                "mobile-small",
                Mobile(Small),
                (1_000, 1_300),
                100,
                residual(50, 20, 10, 5),
                RESIDUAL_ONLY,
            ),
            product(
                "mobile-medium",
                Mobile(Medium),
                (2_000, 2_500),
                100,
                residual(100, 40, 20, 10),
                BONUS_TIER,
            ),
            product(
                "mobile-large",
                Mobile(Large),
                (3_000, 3_700),
                100,
                residual(150, 60, 30, 15),
                BONUS_TIER,
            ),
            product(
                "mobile-unlimited",
                Mobile(Unlimited),
                (4_000, 5_000),
                150,
                residual(200, 80, 40, 20),
                BONUS_TIER,
            ),
            product(
                "internet",
                Internet,
                (3_500, 4_500),
                100,
                residual(200, 80, 40, 20),
                ProductFlags {
                    supports_soho: false,
                    ..BONUS_TIER
                },
            ),
            product("tv", Tv, (1_500, 2_000), 50, residual(100, 40, 20, 10), RESIDUAL_ONLY),
            product("tv-lite", TvLite, (800, 1_000), 50, ResidualRates::ZERO, NO_OPTIONS),
            product(
                "energy-residential",
                EnergyResidential,
                (2_000, 2_500),
                100,
                residual(150, 60, 30, 15),
                RESIDUAL_ONLY,
            ),
            product(
                "energy-business",
                EnergyBusiness,
                (3_000, 3_800),
                150,
                residual(250, 100, 50, 25),
                RESIDUAL_ONLY,
            ),
            product(
                "boiler-maintenance",
                BoilerMaintenance,
                (1_000, 1_200),
                50,
                ResidualRates::ZERO,
                NO_OPTIONS,
            ),
        ];

        let products: BTreeMap<ProductId, ProductDefinition> = products
            .into_iter()
            .map(|product| (product.id.clone(), product))
            .collect();

        let ranks = RankLadder::from_ordered(vec![
            rank(ConsultantRank::Consultant, 0, 0, 0, 0),
            rank(ConsultantRank::SeniorConsultant, 10, 0, 0, 500),
            rank(ConsultantRank::TeamLeader, 15, 50, 2, 1_000),
            rank(ConsultantRank::Manager, 20, 150, 3, 1_500),
            rank(ConsultantRank::SeniorManager, 25, 400, 4, 2_000),
            rank(ConsultantRank::Director, 30, 1_000, 5, 3_000),
            rank(ConsultantRank::ExecutiveDirector, 40, 2_500, 6, 5_000),
        ]);

        Catalog {
            version: STANDARD_CATALOG_VERSION.to_string(),
            products,
            bonuses: BonusSchedule {
                convergence: CategoryBonus {
                    mobile: 500,
                    internet: 1_000,
                },
                portability: CategoryBonus {
                    mobile: 500,
                    internet: 1_000,
                },
                business_registration: 1_000,
                e_billing: 200,
                direct_debit: 300,
                business_registration_points: Points::HALF,
                easy_switch_points: Points::HALF,
            },
            ranks,
            pqs: PqsRules {
                window_days: 30,
                min_total_points: Points::whole(12),
                min_mobile_points: Points::whole(7),
                min_energy_points: Points::whole(3),
                min_internet_points: Points::whole(2),
                bonus: 5_000,
            },
            activity: ActivityRules {
                min_personal_points: Points::whole(10),
            },
        }
    }
}
