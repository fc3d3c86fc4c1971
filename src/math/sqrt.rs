//! Integer square roots.
//!
//! The first deposit into an empty pool is priced by a square root, so
//! [`isqrt_scaled`] is a floor root computed with Newton's method and never
//! rounds up.

use alloy_primitives::U256;

use crate::error::VaultError;

/// Floor of `√(n × scale)`, with the product held in 256 bits.
///
/// # Errors
///
/// Returns [`VaultError::Overflow`] if the root does not fit in `u128`,
/// which needs `n × scale ≥ 2²⁵⁶`; unreachable for `u128` inputs.
///
/// # Examples
///
/// ```
/// use hydra_vault::math::isqrt_scaled;
///
/// let e18 = 1_000_000_000_000_000_000u128;
/// assert_eq!(isqrt_scaled(4 * e18, e18), Ok(2 * e18));
/// ```
pub fn isqrt_scaled(n: u128, scale: u128) -> Result<u128, VaultError> {
    let product = U256::from(n)
        .checked_mul(U256::from(scale))
        .ok_or(VaultError::Overflow("isqrt operand"))?;
    let root = isqrt_u256(product);
    u128::try_from(root).map_err(|_| VaultError::Overflow("isqrt result exceeds u128"))
}

fn isqrt_u256(n: U256) -> U256 {
    let two = U256::from(2u8);
    if n < two {
        return n;
    }
    let mut x = n;
    // (n + 1) / 2 without overflowing at U256::MAX
    let mut y = n / two + (n % two);
    while y < x {
        x = y;
        y = (x + n / x) / two;
    }
    x
}
