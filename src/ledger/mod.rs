//! Reference implementation of the external token ledger.
//!
//! [`Erc20Ledger`] is a plain in-memory fungible-token ledger implementing
//! [`TokenLedger`](crate::traits::TokenLedger).  It stands in for the
//! underlying asset in tests, demos, and simulations.

mod erc20;

pub use erc20::{Erc20Ledger, TokenTransfer};
