//! Arithmetic utilities for share accounting.
//!
//! This module provides [`CheckedArithmetic`] for overflow-safe updates of
//! domain quantities, [`mul_div`] for explicitly rounded ratios with a
//! 256-bit intermediate, and the scaled integer square root used to price a
//! pool's first deposit.

mod checked;
mod rounding;
mod sqrt;

pub use checked::CheckedArithmetic;
pub use rounding::mul_div;
pub use sqrt::isqrt_scaled;
