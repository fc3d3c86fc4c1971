//! Identity of the deployable pool code.

use alloy_primitives::{keccak256, B256};

/// Canonical deployable code of [`SingleAssetPool`](crate::pools::SingleAssetPool).
///
/// Its keccak-256 digest is the `codeHash` input of pool address
/// derivation.  The bytes name the pool implementation and its accounting
/// revision; any change to pool semantics must bump the revision so that
/// pools with different behaviour never share an address.
pub const POOL_INIT_CODE: &[u8] = b"hydra-vault:single-asset-pool:v1";

/// Returns `keccak256(POOL_INIT_CODE)`.
#[must_use]
pub fn pool_init_code_hash() -> B256 {
    keccak256(POOL_INIT_CODE)
}
