//! Millisatoshi money type
//!
//! All amounts and costs handled by this crate are integer millisatoshis.
//! Floats never enter the money path.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};
use thiserror::Error;

/// Returned when converting a negative signed value into `MilliSatoshi`
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
#[error("Negative amount: {0} msat")]
pub struct NegativeAmountError(pub i64);

/// Amount in millisatoshis
///
/// Addition saturates at `u64::MAX` rather than wrapping, so running totals
/// built from many hops can never silently roll over.
///
/// # Example
/// ```
/// use imputed_cost_core_rs::MilliSatoshi;
///
/// let a = MilliSatoshi::new(1_500);
/// let b = MilliSatoshi::try_from(500_i64).unwrap();
/// assert_eq!(a + b, MilliSatoshi::new(2_000));
/// assert!(MilliSatoshi::try_from(-1_i64).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct MilliSatoshi(u64);

impl MilliSatoshi {
    pub const ZERO: MilliSatoshi = MilliSatoshi(0);
    pub const MAX: MilliSatoshi = MilliSatoshi(u64::MAX);

    pub const fn new(msat: u64) -> Self {
        Self(msat)
    }

    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// Widened value for overflow-free limit arithmetic
    pub const fn to_i128(self) -> i128 {
        self.0 as i128
    }

    /// Clamp an i128 intermediate into the representable range
    pub(crate) fn saturating_from_i128(value: i128) -> Self {
        if value <= 0 {
            Self::ZERO
        } else if value >= u64::MAX as i128 {
            Self::MAX
        } else {
            Self(value as u64)
        }
    }

    pub fn saturating_add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl From<u64> for MilliSatoshi {
    fn from(msat: u64) -> Self {
        Self(msat)
    }
}

impl TryFrom<i64> for MilliSatoshi {
    type Error = NegativeAmountError;

    fn try_from(msat: i64) -> Result<Self, Self::Error> {
        u64::try_from(msat)
            .map(Self)
            .map_err(|_| NegativeAmountError(msat))
    }
}

impl Add for MilliSatoshi {
    type Output = MilliSatoshi;

    fn add(self, rhs: Self) -> Self::Output {
        self.saturating_add(rhs)
    }
}

impl AddAssign for MilliSatoshi {
    fn add_assign(&mut self, rhs: Self) {
        *self = self.saturating_add(rhs);
    }
}

impl fmt::Display for MilliSatoshi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} msat", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_addition_saturates() {
        let near_max = MilliSatoshi::new(u64::MAX - 1);
        assert_eq!(near_max + MilliSatoshi::new(10), MilliSatoshi::MAX);

        let mut acc = MilliSatoshi::MAX;
        acc += MilliSatoshi::new(1);
        assert_eq!(acc, MilliSatoshi::MAX);
    }

    #[test]
    fn test_saturating_from_i128_bounds() {
        assert_eq!(MilliSatoshi::saturating_from_i128(-5), MilliSatoshi::ZERO);
        assert_eq!(MilliSatoshi::saturating_from_i128(42), MilliSatoshi::new(42));
        assert_eq!(
            MilliSatoshi::saturating_from_i128(i128::MAX),
            MilliSatoshi::MAX
        );
    }

    #[test]
    fn test_try_from_signed() {
        assert_eq!(MilliSatoshi::try_from(0_i64), Ok(MilliSatoshi::ZERO));
        assert_eq!(
            MilliSatoshi::try_from(-100_i64),
            Err(NegativeAmountError(-100))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(MilliSatoshi::new(1234).to_string(), "1234 msat");
    }
}
