//! Commission Engine
//!
//! Pure, deterministic commission arithmetic for a referral sales network.
//!
//! # Design Principles
//!
//! 1. **Integer money** - amounts are `u64` cents, percentages are basis points
//! 2. **Round once** - half away from zero, at output boundaries only
//! 3. **Injected catalog** - every computation takes a `&Catalog`; no globals,
//!    no clock, no I/O
//! 4. **Seller keeps the bonuses** - only the pre-bonus base and the own
//!    residual cascade to the upline
//!
//! # Pipeline
//!
//! ```text
//! Sale ──> SaleContext ──> per item: commission, points, residual
//!                                         │
//!                           aggregate ────┴──> upline cascade (x2) ──> CommissionResult
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use lib_catalog::Catalog;
//! use lib_commission::compute_deal;
//! use lib_types::{ConsultantRank, Sale, SoldItem, UplineChain};
//!
//! let catalog = Catalog::standard();
//! let sale = Sale::new(vec![SoldItem::plain("mobile-large")]);
//! let chain = UplineChain::from_sponsors(["alice", "bob"])?;
//! let result = compute_deal(&catalog, &sale, ConsultantRank::Consultant, &chain)?;
//! ```

pub mod errors;
pub mod arithmetic;
pub mod bonus;
pub mod commission;
pub mod points;
pub mod residual;
pub mod upline;
pub mod clawback;
pub mod qualification;
pub mod deal;

mod golden_vectors;

pub use errors::{EngineError, EngineResult};
pub use arithmetic::share_of;
pub use commission::{commission_for_product, compute_item_commission, CommissionBreakdown};
pub use points::{compute_points, points_for_product, PointBreakdown};
pub use residual::{compute_residual, residual_for_product, ResidualSchedule};
pub use upline::{
    distribute, share_for_depth, UplineDistribution, UplinePayout, UPLINE_SHARES_BPS,
    UPLINE_TOTAL_BPS,
};
pub use clawback::{
    clawback_payouts, compute_clawback, whole_months_between, Clawback, ClawbackWindow,
    RecipientClawback,
};
pub use qualification::{
    evaluate_period, evaluate_pqs, evaluate_rank, is_quarter_active, milestone_bonus, pqs_met,
    CategoryPoints, PeriodInput, PqsOutcome, QualificationReport, QuarterActivity, RankStanding,
    ServiceRecord,
};
pub use deal::{
    clawback_deal, compute_deal, compute_offer, CommissionResult, DealClawback, ItemResult,
    OfferResult, SaleContext,
};
