//! Raw token amount with checked arithmetic.

use core::fmt;

/// A raw quantity of the underlying token, in its smallest unit.
///
/// `Amount` never interprets decimals.  All `u128` values are valid
/// amounts.  Arithmetic methods are checked and return `None` on overflow
/// or underflow instead of panicking; the
/// [`CheckedArithmetic`](crate::math::CheckedArithmetic) trait lifts those
/// into [`VaultError`](crate::error::VaultError)s.
///
/// # Examples
///
/// ```
/// use hydra_vault::domain::Amount;
///
/// let reserve = Amount::new(9_000);
/// let deposit = Amount::new(1_000);
/// assert_eq!(reserve.checked_add(&deposit), Some(Amount::new(10_000)));
/// assert_eq!(deposit.checked_sub(&reserve), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub struct Amount(u128);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Maximum representable amount.
    pub const MAX: Self = Self(u128::MAX);

    /// Creates a new `Amount` from a raw `u128` value.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the underlying `u128` value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if the amount is zero.
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

impl From<u128> for Amount {
    fn from(value: u128) -> Self {
        Self(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
