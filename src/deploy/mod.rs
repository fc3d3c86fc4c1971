//! Content-addressed pool deployment.
//!
//! A pool's address is a pure function of the deploying factory, the
//! underlying token, and the hash of the pool's deployable code.  Anyone
//! can compute it off-ledger, before the pool exists:
//!
//! ```text
//! salt     = keccak256(token[20])
//! codeHash = keccak256(POOL_INIT_CODE)
//! address  = keccak256(0xff ‖ factory[20] ‖ salt[32] ‖ codeHash[32])[12..32]
//! ```
//!
//! This is the CREATE2 rule (EIP-1014), so tooling that already derives
//! CREATE2 addresses can locate pools without calling into the system.
//!
//! # Example
//!
//! ```rust
//! use hydra_vault::deploy::{pool_init_code_hash, AddressDeriver};
//! use hydra_vault::domain::Address;
//!
//! let factory = Address::from_low_u8(0xfa);
//! let token   = Address::from_low_u8(0x01);
//!
//! let a = AddressDeriver::pool_address(factory, token, pool_init_code_hash());
//! let b = AddressDeriver::pool_address(factory, token, pool_init_code_hash());
//! assert_eq!(a, b);
//! ```

mod address_deriver;
mod init_code;

pub use address_deriver::AddressDeriver;
pub use init_code::{pool_init_code_hash, POOL_INIT_CODE};
