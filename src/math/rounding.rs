//! Rounded ratios with a 256-bit intermediate.
//!
//! [`mul_div`] evaluates `a × b / d` with an explicit [`Rounding`]
//! direction, which is how every share-ratio formula in the pools is
//! computed: `a × b` of two `u128`s can never overflow the intermediate,
//! and only a quotient that does not fit `u128` fails.
//!
//! # Convention
//!
//! **Always round against the caller** (pool-favourable):
//!
//! | Quantity | Direction |
//! |----------|-----------|
//! | Shares issued on mint | [`Rounding::Down`] |
//! | Tokens paid on burn | [`Rounding::Down`] |
//! | Shares required for a payout | [`Rounding::Up`] |
//!
//! # Examples
//!
//! ```
//! use hydra_vault::domain::Rounding;
//! use hydra_vault::math::mul_div;
//!
//! assert_eq!(mul_div(10, 1, 3, Rounding::Down), Ok(3));
//! assert_eq!(mul_div(10, 1, 3, Rounding::Up), Ok(4));
//! assert_eq!(mul_div(u128::MAX, 2, 4, Rounding::Down), Ok(u128::MAX / 2));
//! ```

use alloy_primitives::U256;

use crate::domain::Rounding;
use crate::error::VaultError;

/// Computes `a × b / d` with a 256-bit intermediate and explicit rounding.
///
/// # Errors
///
/// - [`VaultError::DivisionByZero`] if `d` is zero.
/// - [`VaultError::Overflow`] if the quotient does not fit in `u128`.
pub fn mul_div(a: u128, b: u128, d: u128, rounding: Rounding) -> Result<u128, VaultError> {
    if d == 0 {
        return Err(VaultError::DivisionByZero);
    }
    let product = U256::from(a)
        .checked_mul(U256::from(b))
        .ok_or(VaultError::Overflow("mul_div intermediate product"))?;
    let denominator = U256::from(d);
    let mut quotient = product / denominator;
    if rounding.is_up() && !(product % denominator).is_zero() {
        quotient = quotient
            .checked_add(U256::from(1u8))
            .ok_or(VaultError::Overflow("mul_div ceiling"))?;
    }
    u128::try_from(quotient).map_err(|_| VaultError::Overflow("mul_div quotient exceeds u128"))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn exact_division_ignores_direction() {
        assert_eq!(mul_div(100, 1, 10, Rounding::Down), Ok(10));
        assert_eq!(mul_div(100, 1, 10, Rounding::Up), Ok(10));
    }

    #[test]
    fn remainder_rounds_by_direction() {
        assert_eq!(mul_div(9, 1, 10, Rounding::Down), Ok(0));
        assert_eq!(mul_div(9, 1, 10, Rounding::Up), Ok(1));
    }

    #[test]
    fn ceiling_at_max_values() {
        assert_eq!(mul_div(u128::MAX, 1, 2, Rounding::Up), Ok(u128::MAX / 2 + 1));
        assert_eq!(mul_div(u128::MAX, 1, u128::MAX - 1, Rounding::Up), Ok(2));
    }

    #[test]
    fn mul_div_zero_denominator() {
        assert_eq!(
            mul_div(1, 1, 0, Rounding::Down),
            Err(VaultError::DivisionByZero)
        );
    }

    #[test]
    fn mul_div_wide_intermediate() {
        // u128::MAX * u128::MAX / u128::MAX would overflow a u128 product.
        let Ok(r) = mul_div(u128::MAX, u128::MAX, u128::MAX, Rounding::Down) else {
            panic!("expected Ok");
        };
        assert_eq!(r, u128::MAX);
    }

    #[test]
    fn mul_div_quotient_overflow() {
        let Err(VaultError::Overflow(_)) = mul_div(u128::MAX, 2, 1, Rounding::Down) else {
            panic!("expected Overflow");
        };
    }

    #[test]
    fn mul_div_rounding() {
        assert_eq!(mul_div(10, 1, 3, Rounding::Down), Ok(3));
        assert_eq!(mul_div(10, 1, 3, Rounding::Up), Ok(4));
        assert_eq!(mul_div(9, 3, 9, Rounding::Up), Ok(3));
    }

    #[test]
    fn mul_div_share_ratio_at_18_decimals() {
        let e18 = 1_000_000_000_000_000_000u128;
        // 4e18 deposit against reserve 4e18 and supply 2e18
        assert_eq!(
            mul_div(4 * e18, 2 * e18, 4 * e18, Rounding::Down),
            Ok(2 * e18)
        );
    }
}
