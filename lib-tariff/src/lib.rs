//! Tariff Engine
//!
//! Pure, deterministic customer pricing for bundled subscriptions.
//!
//! The tariff sheet is independent of the commission catalog: it prices what
//! the customer pays, not what the consultant earns.
//!
//! # Rules (enforced in code)
//!
//! - Two or more mobile lines re-price *every* line on a multi-line rate
//!   sheet; which sheet depends on whether internet is in the same quote
//! - Mobile + internet deducts a fixed convergence discount from the internet
//!   list price; a second-address discount stacks on top
//! - The comfort add-on is discounted only on the top internet tier
//! - Savings are projected unclamped and may be negative
//!
//! # Usage
//!
//! ```ignore
//! use lib_tariff::{compute_quote, PlanId, QuoteRequest, TariffSheet};
//!
//! let sheet = TariffSheet::standard();
//! let request = QuoteRequest {
//!     internet: Some(PlanId::from("fiber-1000")),
//!     mobile_lines: vec![PlanId::from("mobile-medium")],
//!     ..QuoteRequest::default()
//! };
//! let quote = compute_quote(&sheet, &request)?;
//! ```

pub mod errors;
pub mod plans;
pub mod sheet;
pub mod quote;

pub use errors::{TariffError, TariffResult};
pub use plans::{InternetPlan, MobilePlan, MobileRates, PlanId, RateSheet, TvPlan};
pub use sheet::{ComfortPricing, Discounts, TariffSheet};
pub use quote::{
    compute_quote, ComfortQuote, InternetQuote, MobileLineQuote, QuoteRequest, QuoteResult,
    SavingsProjection, TvQuote, SAVINGS_HORIZONS_MONTHS,
};

/// Version tag of the built-in tariff sheet
pub const STANDARD_TARIFF_VERSION: &str = "2026.10";
