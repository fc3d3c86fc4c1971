//! Fundamental domain value types used throughout the vault library.
//!
//! This module contains the value types that model the domain: account
//! addresses, token amounts, pool shares, rounding direction, the per-call
//! context, reserve snapshots, and the events pools and the factory emit.
//! All quantities are newtypes over `u128` with checked arithmetic.

mod address;
mod amount;
mod call_context;
mod event;
mod liquidity;
mod reserves;
mod rounding;

pub use address::Address;
pub use amount::Amount;
pub use call_context::CallContext;
pub use event::{FactoryEvent, PoolEvent, PoolEventKind};
pub use liquidity::Liquidity;
pub use reserves::Reserves;
pub use rounding::Rounding;
