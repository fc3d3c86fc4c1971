//! Pool share units.

use core::fmt;

/// A quantity of pool shares ("liquidity tokens").
///
/// Distinct from [`Amount`](super::Amount) because it counts claims on a pool's reserve,
/// not units of the underlying token.  All `u128` values are valid share
/// quantities.
///
/// # Examples
///
/// ```
/// use hydra_vault::domain::Liquidity;
///
/// let a = Liquidity::new(1_000);
/// let b = Liquidity::new(2_000);
/// assert_eq!(a.checked_add(&b), Some(Liquidity::new(3_000)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Liquidity(u128);

impl Liquidity {
    /// No shares.
    pub const ZERO: Self = Self(0);

    /// Unlimited share allowance sentinel.
    pub const MAX: Self = Self(u128::MAX);

    /// Creates a new `Liquidity` from a raw `u128` value.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the underlying `u128` value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if the quantity is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_add(&self, other: &Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked subtraction. Returns `None` on underflow.
    #[must_use]
    pub const fn checked_sub(&self, other: &Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }
}

impl From<u128> for Liquidity {
    fn from(value: u128) -> Self {
        Self(value)
    }
}

impl fmt::Display for Liquidity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_and_get() {
        assert_eq!(Liquidity::new(42).get(), 42);
        assert!(Liquidity::ZERO.is_zero());
        assert_eq!(Liquidity::default(), Liquidity::ZERO);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Liquidity::new(1_000)), "1000");
    }

    #[test]
    fn add_and_sub() {
        let a = Liquidity::new(10);
        assert_eq!(a.checked_add(&Liquidity::new(5)), Some(Liquidity::new(15)));
        assert_eq!(a.checked_sub(&Liquidity::new(11)), None);
        assert_eq!(Liquidity::MAX.checked_add(&Liquidity::new(1)), None);
    }
}
