//! Cost Parameters and Linear Cost Arithmetic
//!
//! Defines the four coefficients that describe the imputed cost of one
//! directed edge, and the overflow-safe linear formula that turns them into
//! a millisatoshi cost.

use crate::models::amount::MilliSatoshi;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Parts per million (ppm) for rate calculations
pub const RATE_PARTS: i64 = 1_000_000;

/// Maximum rate in ppm (10x the amount)
///
/// Rates above this are clamped before multiplication.
pub const MAX_RATE_PPM: i64 = 10 * RATE_PARTS;

/// Lower bound of any computed cost
///
/// Shortest-path search cannot handle negative edge weights.
pub const MIN_COST: i64 = 0;

/// Imputed cost coefficients for a node pair or a namespace default
///
/// Coefficients may be negative to express discounts; the computed cost is
/// floored at `MIN_COST` either way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CostParameters {
    /// Cost rate in ppm of the amount sent. Incurred only on success.
    #[serde(default)]
    pub cost_rate_ppm: i64,

    /// Base cost in msat. Incurred only on success.
    #[serde(default)]
    pub cost_base_msat: i64,

    /// Attempt cost rate in ppm of the amount sent. Incurred regardless of
    /// the payment outcome.
    #[serde(default)]
    pub attempt_cost_rate_ppm: i64,

    /// Base attempt cost in msat. Incurred regardless of the payment
    /// outcome.
    #[serde(default)]
    pub attempt_cost_base_msat: i64,
}

impl CostParameters {
    pub const fn new(
        cost_rate_ppm: i64,
        cost_base_msat: i64,
        attempt_cost_rate_ppm: i64,
        attempt_cost_base_msat: i64,
    ) -> Self {
        Self {
            cost_rate_ppm,
            cost_base_msat,
            attempt_cost_rate_ppm,
            attempt_cost_base_msat,
        }
    }

    /// True when every coefficient is zero (no imputed cost at all)
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Success-only cost of forwarding `amount` under these parameters
    pub fn cost(&self, amount: MilliSatoshi) -> MilliSatoshi {
        calc_cost(self.cost_base_msat, self.cost_rate_ppm, amount)
    }

    /// Always-incurred attempt cost of forwarding `amount`
    pub fn attempt_cost(&self, amount: MilliSatoshi) -> MilliSatoshi {
        calc_cost(self.attempt_cost_base_msat, self.attempt_cost_rate_ppm, amount)
    }
}

/// Compute `rate_ppm * amount / RATE_PARTS + base_msat`
///
/// The rate is capped at `MAX_RATE_PPM` and the product is formed in i128,
/// so no input combination can overflow. Division truncates toward zero.
/// The result is floored at `MIN_COST` and saturates at `MilliSatoshi::MAX`.
///
/// # Example
/// ```
/// use imputed_cost_core_rs::costs::calc_cost;
/// use imputed_cost_core_rs::MilliSatoshi;
///
/// // (1000 ppm * 100_000 / 1_000_000) + 100 = 200
/// assert_eq!(calc_cost(100, 1000, MilliSatoshi::new(100_000)), MilliSatoshi::new(200));
///
/// // Negative results clamp to zero
/// assert_eq!(calc_cost(-5, -1000, MilliSatoshi::new(100_000)), MilliSatoshi::ZERO);
/// ```
pub fn calc_cost(base_msat: i64, rate_ppm: i64, amount: MilliSatoshi) -> MilliSatoshi {
    let rate_ppm = if rate_ppm > MAX_RATE_PPM {
        trace!(rate_ppm, max = MAX_RATE_PPM, "capping imputed cost rate");
        MAX_RATE_PPM
    } else {
        rate_ppm
    };

    let cost =
        (rate_ppm as i128 * amount.to_i128()) / RATE_PARTS as i128 + base_msat as i128;

    if cost < MIN_COST as i128 {
        trace!(%cost, "clamping negative imputed cost");
        return MilliSatoshi::saturating_from_i128(MIN_COST as i128);
    }

    MilliSatoshi::saturating_from_i128(cost)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msat(v: u64) -> MilliSatoshi {
        MilliSatoshi::new(v)
    }

    #[test]
    fn test_default_params_are_zero() {
        let params = CostParameters::default();
        assert!(params.is_zero());
        assert_eq!(params.cost(msat(1_000_000)), MilliSatoshi::ZERO);
        assert_eq!(params.attempt_cost(msat(1_000_000)), MilliSatoshi::ZERO);
    }

    #[test]
    fn test_linear_cost() {
        // (2000 ppm * 1000 / 1_000_000) + 200 = 202
        assert_eq!(calc_cost(200, 2000, msat(1000)), msat(202));
        // (2000 ppm * 1_000_000_000 / 1_000_000) + 200 = 2_000_200
        assert_eq!(calc_cost(200, 2000, msat(1_000_000_000)), msat(2_000_200));
        // Zero amount leaves only the base
        assert_eq!(calc_cost(200, 2000, msat(0)), msat(200));
    }

    #[test]
    fn test_rate_above_maximum_is_capped() {
        let capped = calc_cost(1, MAX_RATE_PPM + 1000, msat(1_000_000));
        assert_eq!(capped, msat(MAX_RATE_PPM as u64 + 1));
        assert_eq!(capped, calc_cost(1, MAX_RATE_PPM, msat(1_000_000)));
    }

    #[test]
    fn test_negative_result_is_floored() {
        assert_eq!(calc_cost(-5, -1000, msat(100_000)), MilliSatoshi::ZERO);
        assert_eq!(calc_cost(-10, 0, msat(0)), MilliSatoshi::ZERO);
    }

    #[test]
    fn test_negative_rate_offset_by_base() {
        // (-1000 ppm * 100_000 / 1_000_000) + 150 = -100 + 150 = 50
        assert_eq!(calc_cost(150, -1000, msat(100_000)), msat(50));
    }

    #[test]
    fn test_division_truncates_toward_zero() {
        // -1 ppm * 999_999 / 1_000_000 = -0.999999 -> 0 (not -1), + 1 = 1
        assert_eq!(calc_cost(1, -1, msat(999_999)), msat(1));
        // 1 ppm * 999_999 / 1_000_000 = 0.999999 -> 0
        assert_eq!(calc_cost(0, 1, msat(999_999)), msat(0));
    }

    #[test]
    fn test_huge_amount_does_not_overflow() {
        let cost = calc_cost(i64::MAX, MAX_RATE_PPM, MilliSatoshi::MAX);
        assert_eq!(cost, MilliSatoshi::MAX);
    }

    #[test]
    fn test_params_deserialize_with_missing_fields() {
        let params: CostParameters =
            serde_json::from_str(r#"{"cost_rate_ppm": 1000, "cost_base_msat": 100}"#).unwrap();
        assert_eq!(params, CostParameters::new(1000, 100, 0, 0));
    }
}
