//! Per-call execution context.

use super::Address;

/// Who is calling, and when.
///
/// Every state-mutating operation on a pool or the factory receives the
/// context of the transaction it runs in.  The `sender` is the account the
/// operation is attributed to (access checks, event fields, share
/// transfers); `timestamp` is the block time recorded by reserve syncs.
///
/// # Examples
///
/// ```
/// use hydra_vault::domain::{Address, CallContext};
///
/// let wallet = Address::from_low_u8(1);
/// let ctx = CallContext::new(wallet, 1_700_000_000);
/// assert_eq!(ctx.sender(), wallet);
/// assert_eq!(ctx.at(1_700_000_012).timestamp(), 1_700_000_012);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CallContext {
    sender: Address,
    timestamp: u32,
}

impl CallContext {
    /// Creates a context for `sender` at block time `timestamp`.
    #[must_use]
    pub const fn new(sender: Address, timestamp: u32) -> Self {
        Self { sender, timestamp }
    }

    /// Returns the calling account.
    #[must_use]
    pub const fn sender(&self) -> Address {
        self.sender
    }

    /// Returns the block timestamp, truncated to 32 bits.
    #[must_use]
    pub const fn timestamp(&self) -> u32 {
        self.timestamp
    }

    /// Same sender, different block time.
    #[must_use]
    pub const fn at(&self, timestamp: u32) -> Self {
        Self {
            sender: self.sender,
            timestamp,
        }
    }

    /// Same block time, different sender.
    #[must_use]
    pub const fn as_sender(&self, sender: Address) -> Self {
        Self {
            sender,
            timestamp: self.timestamp,
        }
    }
}
