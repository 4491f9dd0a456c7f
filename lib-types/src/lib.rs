//! Sales-network primitives.
//! Stable, serialization-safe, behavior-free.
//!
//! Rule: money is always an integer count of the smallest currency unit.
//! Rate tables and rule logic live in `lib-catalog` and `lib-commission`.

pub mod primitives;
pub mod product;
pub mod rank;
pub mod upline;
pub mod errors;

pub use primitives::{Amount, Bps, Points, SignedAmount, BPS_DENOMINATOR};
pub use product::{
    MobileTier, PointCategory, ProductCategory, ProductId, Sale, SaleOptionFlags, SoldItem,
};
pub use rank::{CommissionTier, ConsultantRank};
pub use upline::{ConsultantId, UplineChain, UplineEntry, MAX_UPLINE_DEPTH};
pub use errors::{TypesError, TypesResult};
