//! Observability events emitted by pools and the factory.

use core::fmt;

use super::{Address, Amount, Liquidity};

/// Discriminant for [`PoolEvent`], convenient for filtering logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PoolEventKind {
    /// Share transfer, including share mint (from zero) and burn (to zero).
    Transfer = 0,
    /// Share allowance update.
    Approval = 1,
    /// Recorded reserve changed.
    Sync = 2,
    /// Deposit accepted and shares issued.
    Mint = 3,
    /// Shares destroyed and tokens paid out.
    Burn = 4,
    /// Excess token balance swept out.
    Skim = 5,
}

impl fmt::Display for PoolEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transfer => write!(f, "Transfer"),
            Self::Approval => write!(f, "Approval"),
            Self::Sync => write!(f, "Sync"),
            Self::Mint => write!(f, "Mint"),
            Self::Burn => write!(f, "Burn"),
            Self::Skim => write!(f, "Skim"),
        }
    }
}

/// An event appended to a pool's log.
///
/// The zero address in `Transfer::from` marks a share mint, in
/// `Transfer::to` a share burn, as on any fungible-token ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PoolEvent {
    /// Shares moved between holders.
    Transfer {
        /// Source holder, or zero for a mint.
        from: Address,
        /// Destination holder, or zero for a burn.
        to: Address,
        /// Shares moved.
        value: Liquidity,
    },
    /// A share allowance was set.
    Approval {
        /// Holder granting the allowance.
        owner: Address,
        /// Account allowed to spend.
        spender: Address,
        /// New allowance.
        value: Liquidity,
    },
    /// The recorded reserve was reconciled to the live balance.
    Sync {
        /// New recorded reserve.
        reserve: Amount,
    },
    /// A deposit was accepted.
    Mint {
        /// Account that invoked `mint`.
        sender: Address,
        /// Recipient of the issued shares.
        to: Address,
        /// Tokens deposited.
        amount: Amount,
    },
    /// Shares were redeemed.
    Burn {
        /// Account that invoked `burn`.
        sender: Address,
        /// Tokens paid out.
        amount: Amount,
        /// Recipient of the payout.
        to: Address,
    },
    /// Balance above the reserve was swept out.
    Skim {
        /// Recipient of the excess.
        to: Address,
        /// Tokens swept.
        amount: Amount,
    },
}

impl PoolEvent {
    /// Returns the event's discriminant.
    #[must_use]
    pub const fn kind(&self) -> PoolEventKind {
        match self {
            Self::Transfer { .. } => PoolEventKind::Transfer,
            Self::Approval { .. } => PoolEventKind::Approval,
            Self::Sync { .. } => PoolEventKind::Sync,
            Self::Mint { .. } => PoolEventKind::Mint,
            Self::Burn { .. } => PoolEventKind::Burn,
            Self::Skim { .. } => PoolEventKind::Skim,
        }
    }
}

/// An event appended to the factory's log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FactoryEvent {
    /// A pool was deployed for `token` at `pool`.
    PoolCreated {
        /// Underlying token.
        token: Address,
        /// Deterministic pool address.
        pool: Address,
        /// Number of pools after this creation.
        count: usize,
    },
    /// The owner role changed hands.
    OwnerChanged {
        /// Owner before the change.
        previous: Address,
        /// Owner after the change.
        new_owner: Address,
    },
}
