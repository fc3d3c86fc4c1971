//! Configuration for the pool factory.

use alloy_primitives::B256;

use crate::deploy::pool_init_code_hash;
use crate::domain::Address;
use crate::error::VaultError;

/// Configuration for a [`PoolFactory`](crate::factory::PoolFactory).
///
/// Defines the factory's own address (the deployer input of pool address
/// derivation), its initial owner, and the code hash that identifies the
/// pool implementation.
///
/// # Validation
///
/// - The factory address must be non-zero.
/// - The owner must be non-zero.
///
/// # Example
///
/// ```rust
/// use hydra_vault::config::FactoryConfig;
/// use hydra_vault::deploy::pool_init_code_hash;
/// use hydra_vault::domain::Address;
///
/// let cfg = FactoryConfig::new(Address::from_low_u8(0xfa), Address::from_low_u8(1))
///     .expect("valid config");
/// assert_eq!(cfg.pool_code_hash(), pool_init_code_hash());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FactoryConfig {
    address: Address,
    owner: Address,
    pool_code_hash: B256,
}

impl FactoryConfig {
    /// Creates a new `FactoryConfig` using the built-in pool code hash.
    ///
    /// # Errors
    ///
    /// Returns [`VaultError::ZeroAddress`] if `address` or `owner` is zero.
    pub fn new(address: Address, owner: Address) -> Result<Self, VaultError> {
        let config = Self {
            address,
            owner,
            pool_code_hash: pool_init_code_hash(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Replaces the pool code hash, e.g. with the bytecode hash of an
    /// on-chain deployment whose addresses must be reproduced.
    #[must_use]
    pub const fn with_pool_code_hash(mut self, pool_code_hash: B256) -> Self {
        self.pool_code_hash = pool_code_hash;
        self
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`VaultError::ZeroAddress`] if `address` or `owner` is zero.
    pub fn validate(&self) -> Result<(), VaultError> {
        self.address.ensure_non_zero("factory address")?;
        self.owner.ensure_non_zero("factory owner")?;
        Ok(())
    }

    /// Returns the factory's own address.
    #[must_use]
    pub const fn address(&self) -> Address {
        self.address
    }

    /// Returns the initial owner.
    #[must_use]
    pub const fn owner(&self) -> Address {
        self.owner
    }

    /// Returns the code hash used for pool address derivation.
    pub const fn pool_code_hash(&self) -> B256 {
        self.pool_code_hash
    }
}
