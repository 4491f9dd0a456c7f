//! Integer share arithmetic
//!
//! Percentages are applied in u128 space and rounded half away from zero
//! exactly once, when the result leaves the engine.

use lib_types::{Amount, Bps, BPS_DENOMINATOR};

/// `amount * bps / 10_000`, rounded half away from zero
pub fn share_of(amount: Amount, bps: Bps) -> Amount {
    let denominator = BPS_DENOMINATOR as u128;
    let scaled = (amount as u128).saturating_mul(bps as u128);
    let rounded = scaled.saturating_add(denominator / 2) / denominator;
    Amount::try_from(rounded).unwrap_or(Amount::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_share() {
        assert_eq!(share_of(6_500, 1_000), 650);
        assert_eq!(share_of(6_500, 100), 65);
    }

    #[test]
    fn test_half_rounds_away_from_zero() {
        assert_eq!(share_of(35, 500), 2); // 1.75
        assert_eq!(share_of(350, 500), 18); // 17.5
        assert_eq!(share_of(350, 100), 4); // 3.5
        assert_eq!(share_of(349, 100), 3); // 3.49
    }

    #[test]
    fn test_full_and_zero_share() {
        assert_eq!(share_of(1_234, 10_000), 1_234);
        assert_eq!(share_of(1_234, 0), 0);
        assert_eq!(share_of(0, 7_500), 0);
    }

    #[test]
    fn test_no_overflow() {
        assert_eq!(share_of(Amount::MAX, 10_000), Amount::MAX);
        assert!(share_of(Amount::MAX, 2_500) < Amount::MAX);
    }
}
