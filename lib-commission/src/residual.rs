//! Residual (fidelity) calculator
//!
//! Direct catalog lookup. Spreading the residual across the upline is the
//! job of [`crate::upline::distribute`].

use lib_catalog::{Catalog, ProductDefinition, ResidualRates};
use lib_types::{Amount, SoldItem};
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign};

use crate::errors::EngineResult;

/// Monthly residual by upline depth bucket
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResidualSchedule {
    pub own: Amount,
    pub depth1: Amount,
    pub depth2_to_6: Amount,
    pub depth7: Amount,
}

impl ResidualSchedule {
    pub const ZERO: ResidualSchedule = ResidualSchedule {
        own: 0,
        depth1: 0,
        depth2_to_6: 0,
        depth7: 0,
    };

    pub const fn is_zero(&self) -> bool {
        self.own == 0 && self.depth1 == 0 && self.depth2_to_6 == 0 && self.depth7 == 0
    }

    /// Bucket amount for an upline depth; 0 outside `1..=7`
    pub const fn for_depth(&self, depth: u8) -> Amount {
        match depth {
            1 => self.depth1,
            2..=6 => self.depth2_to_6,
            7 => self.depth7,
            _ => 0,
        }
    }
}

impl From<ResidualRates> for ResidualSchedule {
    fn from(rates: ResidualRates) -> Self {
        Self {
            own: rates.own,
            depth1: rates.depth1,
            depth2_to_6: rates.depth2_to_6,
            depth7: rates.depth7,
        }
    }
}

impl Add for ResidualSchedule {
    type Output = ResidualSchedule;

    fn add(self, rhs: ResidualSchedule) -> ResidualSchedule {
        ResidualSchedule {
            own: self.own.saturating_add(rhs.own),
            depth1: self.depth1.saturating_add(rhs.depth1),
            depth2_to_6: self.depth2_to_6.saturating_add(rhs.depth2_to_6),
            depth7: self.depth7.saturating_add(rhs.depth7),
        }
    }
}

impl AddAssign for ResidualSchedule {
    fn add_assign(&mut self, rhs: ResidualSchedule) {
        *self = *self + rhs;
    }
}

/// Residual for a resolved product; zero everywhere unless it generates residual
pub fn residual_for_product(product: &ProductDefinition) -> ResidualSchedule {
    product.effective_residual().into()
}

pub fn compute_residual(catalog: &Catalog, item: &SoldItem) -> EngineResult<ResidualSchedule> {
    let product = catalog.lookup(item.product_id.as_str())?;
    Ok(residual_for_product(product))
}
