//! Explicit rounding direction for share/token conversions.

/// Rounding direction for every division in the share-ratio formulas.
///
/// Minting and burning round [`Down`](Rounding::Down) so the depositor or
/// redeemer never receives more than their exact entitlement;
/// [`liquidity_to_burn`](crate::pools::SingleAssetPool::liquidity_to_burn)
/// rounds [`Up`](Rounding::Up) so the caller is never shortchanged.
///
/// # Examples
///
/// ```
/// use hydra_vault::domain::Rounding;
///
/// assert!(Rounding::Up.is_up());
/// assert!(Rounding::Down.is_down());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rounding {
    /// Round towards positive infinity (ceiling).
    Up,
    /// Round towards zero (floor).
    Down,
}

impl Rounding {
    /// Returns `true` if this is [`Rounding::Up`].
    #[must_use]
    pub const fn is_up(&self) -> bool {
        matches!(self, Self::Up)
    }

    /// Returns `true` if this is [`Rounding::Down`].
    #[must_use]
    pub const fn is_down(&self) -> bool {
        matches!(self, Self::Down)
    }
}
