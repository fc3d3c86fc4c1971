//! 20-byte account address.

use core::fmt;
use core::str::FromStr;

use crate::error::VaultError;

/// An account address on the ledger: a token contract, a pool, the factory,
/// or an externally owned wallet.
///
/// A thin wrapper over [`alloy_primitives::Address`], the width used by the
/// content-addressed deployment formula in [`crate::deploy`].  All byte
/// sequences are valid addresses; the all-zero address is reserved as the
/// mint/burn sentinel and is rejected wherever a real account is required.
/// Displays as lowercase hex so logs and events stay stable.
///
/// # Examples
///
/// ```
/// use hydra_vault::domain::Address;
///
/// let addr: Address = "0x1000000000000000000000000000000000000000".parse().expect("hex");
/// assert_eq!(addr.as_bytes()[0], 0x10);
/// assert_eq!(addr.to_string(), "0x1000000000000000000000000000000000000000");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Address(alloy_primitives::Address);

impl Address {
    /// The zero address.
    pub const ZERO: Self = Self(alloy_primitives::Address::ZERO);

    /// Creates an `Address` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(alloy_primitives::Address::new(bytes))
    }

    /// Returns the underlying 20-byte representation.
    #[must_use]
    pub fn as_bytes(&self) -> [u8; 20] {
        self.0.into_array()
    }

    /// Returns `true` for the zero address.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns an address whose last byte is `n` and all other bytes zero.
    ///
    /// Handy for fixtures; real accounts come from [`Address::from_bytes`]
    /// or hex parsing.
    #[must_use]
    pub const fn from_low_u8(n: u8) -> Self {
        let mut bytes = [0u8; 20];
        bytes[19] = n;
        Self::from_bytes(bytes)
    }

    /// Fails with [`VaultError::ZeroAddress`] when this is the zero address.
    ///
    /// # Errors
    ///
    /// Returns [`VaultError::ZeroAddress`] carrying `what`.
    pub fn ensure_non_zero(self, what: &'static str) -> Result<Self, VaultError> {
        if self.is_zero() {
            Err(VaultError::ZeroAddress(what))
        } else {
            Ok(self)
        }
    }
}

impl From<alloy_primitives::Address> for Address {
    fn from(inner: alloy_primitives::Address) -> Self {
        Self(inner)
    }
}

impl From<Address> for alloy_primitives::Address {
    fn from(addr: Address) -> Self {
        addr.0
    }
}

impl FromStr for Address {
    type Err = VaultError;

    /// Parses a 40-digit hex string, with or without a `0x` prefix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<alloy_primitives::Address>()
            .map(Self)
            .map_err(|_| VaultError::InvalidConfiguration("address must be 20 hex-encoded bytes"))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0.as_slice()))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({self})")
    }
}
