//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use hydra_vault::prelude::*;
//! ```

pub use crate::domain::{
    Address, Amount, CallContext, FactoryEvent, Liquidity, PoolEvent, Reserves, Rounding,
};

pub use crate::traits::{FromConfig, TokenLedger};

pub use crate::math::CheckedArithmetic;

pub use crate::config::FactoryConfig;

pub use crate::deploy::{pool_init_code_hash, AddressDeriver};

pub use crate::error::VaultError;

pub use crate::factory::PoolFactory;

pub use crate::ledger::Erc20Ledger;

pub use crate::pools::SingleAssetPool;
