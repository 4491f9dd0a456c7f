//! Canonical primitive types for commission and tariff arithmetic
//!
//! Rule: no floats carry money. Ever.
//!
//! - `Amount` is an unsigned count of the smallest currency unit (cents).
//! - `SignedAmount` is used only where a result may legitimately be negative
//!   (savings projections).
//! - `Bps` expresses percentages; 10_000 = 100%.
//! - `Points` is a fixed-point point (ASP) value in hundredths.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

// ============================================================================
// TYPE ALIASES
// ============================================================================

/// Money in the smallest currency unit
pub type Amount = u64;

/// Signed money delta in the smallest currency unit
pub type SignedAmount = i64;

/// Basis points for percentage calculations (10000 = 100%)
pub type Bps = u16;

/// Denominator for `Bps` arithmetic
pub const BPS_DENOMINATOR: u64 = 10_000;

// ============================================================================
// POINTS
// ============================================================================

/// Point (ASP) value, stored as hundredths of a point.
///
/// Half points are common in the catalog (`Points::HALF`), so the value is
/// kept as a fixed-point integer and serialized as that integer.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Points(u32);

impl Points {
    /// Hundredths per whole point
    pub const SCALE: u32 = 100;

    pub const ZERO: Points = Points(0);
    pub const HALF: Points = Points(50);
    pub const ONE: Points = Points(100);

    /// Build from a raw hundredths count
    pub const fn from_hundredths(hundredths: u32) -> Self {
        Self(hundredths)
    }

    /// Build from a whole number of points
    pub const fn whole(points: u32) -> Self {
        Self(points.saturating_mul(Self::SCALE))
    }

    /// Raw hundredths count
    pub const fn hundredths(self) -> u32 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub const fn saturating_add(self, other: Points) -> Points {
        Points(self.0.saturating_add(other.0))
    }
}

impl Add for Points {
    type Output = Points;

    fn add(self, rhs: Points) -> Points {
        self.saturating_add(rhs)
    }
}

impl AddAssign for Points {
    fn add_assign(&mut self, rhs: Points) {
        *self = self.saturating_add(rhs);
    }
}

impl Sum for Points {
    fn sum<I: Iterator<Item = Points>>(iter: I) -> Points {
        iter.fold(Points::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Points> for Points {
    fn sum<I: Iterator<Item = &'a Points>>(iter: I) -> Points {
        iter.copied().sum()
    }
}

impl fmt::Display for Points {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / Self::SCALE, self.0 % Self::SCALE)
    }
}
