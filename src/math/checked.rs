//! Checked arithmetic trait for domain wrapper types.
//!
//! The [`CheckedArithmetic`] trait provides fallible arithmetic operations
//! that return [`Result<Self, VaultError>`](crate::error::VaultError)
//! instead of panicking or wrapping.  Pools and ledgers route every reserve,
//! balance, and supply update through it so that an overflow aborts the
//! whole operation.
//!
//! # Examples
//!
//! ```
//! use hydra_vault::domain::Amount;
//! use hydra_vault::math::CheckedArithmetic;
//!
//! let a = Amount::new(100);
//! let b = Amount::new(200);
//! assert_eq!(a.safe_add(&b), Ok(Amount::new(300)));
//! assert!(a.safe_sub(&b).is_err());
//! ```

use crate::domain::{Amount, Liquidity};
use crate::error::VaultError;

/// Fallible arithmetic for domain wrapper types.
///
/// # Contract
///
/// - **No panics**: all error conditions produce `Err`.
/// - **No saturation**: errors propagate instead.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`VaultError::Overflow`] if the result exceeds `u128`.
    fn safe_add(&self, other: &Self) -> Result<Self, VaultError>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`VaultError::Underflow`] if the result would be negative.
    fn safe_sub(&self, other: &Self) -> Result<Self, VaultError>;
}

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, VaultError> {
        self.checked_add(other)
            .ok_or(VaultError::Overflow("amount addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, VaultError> {
        self.checked_sub(other)
            .ok_or(VaultError::Underflow("amount subtraction underflow"))
    }
}

impl CheckedArithmetic for Liquidity {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, VaultError> {
        self.checked_add(other)
            .ok_or(VaultError::Overflow("share addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, VaultError> {
        self.checked_sub(other)
            .ok_or(VaultError::Underflow("share subtraction underflow"))
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    mod amount {
        use super::*;

        #[test]
        fn add_ok() {
            let Ok(r) = Amount::new(100).safe_add(&Amount::new(200)) else {
                panic!("expected Ok");
            };
            assert_eq!(r, Amount::new(300));
        }

        #[test]
        fn add_overflow() {
            let Err(VaultError::Overflow(_)) = Amount::MAX.safe_add(&Amount::new(1)) else {
                panic!("expected Overflow");
            };
        }

        #[test]
        fn sub_underflow() {
            let Err(VaultError::Underflow(_)) = Amount::new(1).safe_sub(&Amount::new(2)) else {
                panic!("expected Underflow");
            };
        }

        #[test]
        fn chaining_works() {
            // (100 + 200) - 50 = 250
            let result = Amount::new(100)
                .safe_add(&Amount::new(200))
                .and_then(|v| v.safe_sub(&Amount::new(50)));
            assert_eq!(result, Ok(Amount::new(250)));
        }
    }

    mod liquidity {
        use super::*;

        #[test]
        fn add_overflow() {
            let Err(VaultError::Overflow(_)) = Liquidity::MAX.safe_add(&Liquidity::new(1)) else {
                panic!("expected Overflow");
            };
        }

        #[test]
        fn sub_to_zero() {
            assert_eq!(
                Liquidity::new(42).safe_sub(&Liquidity::new(42)),
                Ok(Liquidity::ZERO)
            );
        }

        #[test]
        fn sub_underflow() {
            let Err(VaultError::Underflow(_)) = Liquidity::ZERO.safe_sub(&Liquidity::new(1)) else {
                panic!("expected Underflow");
            };
        }
    }
}
