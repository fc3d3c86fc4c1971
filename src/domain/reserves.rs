//! Snapshot of a pool's recorded reserve.

use core::fmt;

use super::Amount;

/// The pool's last-synchronized reserve and the block time of that sync.
///
/// Returned by
/// [`SingleAssetPool::get_reserves`](crate::pools::SingleAssetPool::get_reserves).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reserves {
    reserve: Amount,
    block_timestamp_last: u32,
}

impl Reserves {
    /// Creates a reserve snapshot.
    #[must_use]
    pub const fn new(reserve: Amount, block_timestamp_last: u32) -> Self {
        Self {
            reserve,
            block_timestamp_last,
        }
    }

    /// Recorded reserve of the underlying token.
    pub const fn reserve(&self) -> Amount {
        self.reserve
    }

    /// Block time of the last sync.
    #[must_use]
    pub const fn block_timestamp_last(&self) -> u32 {
        self.block_timestamp_last
    }
}

impl From<Reserves> for (Amount, u32) {
    fn from(r: Reserves) -> Self {
        (r.reserve, r.block_timestamp_last)
    }
}

impl fmt::Display for Reserves {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.reserve, self.block_timestamp_last)
    }
}
