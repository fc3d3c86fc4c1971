//! The single-asset share pool and its share bookkeeping.
//!
//! A [`SingleAssetPool`] tracks one underlying token's reserve and issues
//! fungible shares against it; [`ShareLedger`] holds the balances and
//! allowances of those shares.  Pools are deployed by
//! [`PoolFactory`](crate::factory::PoolFactory).

mod share_ledger;
mod single_asset;

#[cfg(test)]
mod proptest_properties;

pub use share_ledger::ShareLedger;
pub use single_asset::{SingleAssetPool, INITIAL_SHARE_SCALE};
