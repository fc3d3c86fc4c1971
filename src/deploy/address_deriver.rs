//! Deterministic deployment addresses.

use alloy_primitives::{keccak256, B256};

use crate::domain::Address;

/// Stateless deriver of content-addressed deployment addresses.
///
/// All methods are total pure functions: the same inputs give the same
/// address regardless of deployment order or ledger state.
///
/// # Example
///
/// ```rust
/// use hydra_vault::deploy::AddressDeriver;
/// use hydra_vault::domain::Address;
/// use alloy_primitives::{keccak256, B256};
///
/// // EIP-1014 example 0
/// let addr = AddressDeriver::derive(Address::ZERO, B256::ZERO, keccak256([0u8]));
/// assert_eq!(addr.to_string(), "0x4d1a2e2bb4f88f0250f26ffff098b0b30b26bf38");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AddressDeriver;

impl AddressDeriver {
    /// `keccak256(0xff ‖ deployer ‖ salt ‖ code_hash)[12..32]`.
    #[must_use]
    pub fn derive(deployer: Address, salt: B256, code_hash: B256) -> Address {
        alloy_primitives::Address::from(deployer)
            .create2(salt, code_hash)
            .into()
    }

    /// Salt binding a pool to its underlying token: `keccak256(token)`.
    #[must_use]
    pub fn salt_for(token: Address) -> B256 {
        keccak256(token.as_bytes())
    }

    /// Address of the pool `factory` deploys for `token`.
    #[must_use]
    pub fn pool_address(factory: Address, token: Address, code_hash: B256) -> Address {
        Self::derive(factory, Self::salt_for(token), code_hash)
    }
}
