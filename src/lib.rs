//! # Hydra Vault
//!
//! Single-asset share pools with deterministic, content-addressed
//! deployment.
//!
//! Depositors send an arbitrary fungible token to a pool and receive
//! shares representing a proportional claim on the pooled reserve; shares
//! are later redeemed for a proportional amount of the token.  A factory
//! deploys exactly one pool per token at an address anyone can compute
//! off-line.
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `serde` | no | `Serialize`/`Deserialize` on domain types, events, and config |
//!
//! # Quick Start
//!
//! ```rust
//! use hydra_vault::config::FactoryConfig;
//! use hydra_vault::domain::{Address, Amount, CallContext, Liquidity};
//! use hydra_vault::factory::PoolFactory;
//! use hydra_vault::ledger::Erc20Ledger;
//! use hydra_vault::traits::{FromConfig, TokenLedger};
//!
//! const E18: u128 = 1_000_000_000_000_000_000;
//!
//! let wallet = Address::from_low_u8(1);
//! let token  = Address::from_low_u8(0x10);
//! let ctx    = CallContext::new(wallet, 1_000);
//!
//! // 1. Deploy the factory and a pool for the token
//! let cfg = FactoryConfig::new(Address::from_low_u8(0xfa), wallet).expect("valid config");
//! let mut factory = PoolFactory::from_config(&cfg).expect("factory");
//! let pool_addr = factory.create_pool(&ctx, token).expect("pool created");
//!
//! // 2. Push tokens to the pool, then mint
//! let mut usd = Erc20Ledger::new(token, wallet, Amount::new(10_000 * E18));
//! usd.transfer(&wallet, &pool_addr, Amount::new(9 * E18)).expect("funded");
//! let pool = factory.pool_for_mut(&token).expect("registered");
//! let shares = pool.mint(&ctx, &usd, wallet).expect("minted");
//! assert_eq!(shares, Liquidity::new(3 * E18));
//!
//! // 3. Push shares back to the pool, then burn
//! pool.transfer(&ctx, pool_addr, shares).expect("queued");
//! let out = pool.burn(&ctx, &mut usd, wallet).expect("burned");
//! assert_eq!(out, Amount::new(9 * E18));
//! assert_eq!(pool.total_supply(), Liquidity::ZERO);
//! ```
//!
//! # Pool Addresses
//!
//! ```text
//! pool = keccak256(0xff ‖ factory[20] ‖ keccak256(token[20]) ‖ code_hash[32])[12..32]
//! ```
//!
//! See [`deploy`] for the full derivation.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Caller     │  CallContext (sender, block time)
//! └──────┬──────┘
//!        │ create_pool / set_owner
//!        ▼
//! ┌─────────────┐
//! │   Factory    │  owner check, AddressDeriver, token → pool registry
//! └──────┬──────┘
//!        │ pool_for_mut(token)
//!        ▼
//! ┌─────────────┐
//! │    Pool      │  mint / burn / sync / skim, share ledger, lock
//! └──────┬──────┘
//!        │ TokenLedger (balance_of, transfer)
//!        ▼
//! ┌─────────────┐
//! │ Token ledger │  the underlying asset (e.g. Erc20Ledger)
//! └─────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`Address`](domain::Address), [`Amount`](domain::Amount), [`Liquidity`](domain::Liquidity), events |
//! | [`math`]   | Checked arithmetic, rounded `mul_div`, integer square roots |
//! | [`deploy`] | Pool code identity and [`AddressDeriver`](deploy::AddressDeriver) |
//! | [`traits`] | [`TokenLedger`](traits::TokenLedger) seam and [`FromConfig`](traits::FromConfig) |
//! | [`config`] | [`FactoryConfig`](config::FactoryConfig) |
//! | [`ledger`] | In-memory [`Erc20Ledger`](ledger::Erc20Ledger) for the underlying token |
//! | [`pools`]  | [`SingleAssetPool`](pools::SingleAssetPool) and its [`ShareLedger`](pools::ShareLedger) |
//! | [`factory`] | [`PoolFactory`](factory::PoolFactory) |
//! | [`error`]  | [`VaultError`](error::VaultError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |

pub mod config;
pub mod deploy;
pub mod domain;
pub mod error;
pub mod factory;
pub mod ledger;
pub mod math;
pub mod pools;
pub mod prelude;
pub mod traits;
