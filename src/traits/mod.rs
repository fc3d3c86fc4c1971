//! Core trait abstractions.
//!
//! [`TokenLedger`] is the seam between a pool and the external token it
//! holds; [`FromConfig`] is the configuration-driven constructor used by
//! the factory.

mod from_config;
mod token_ledger;

pub use from_config::FromConfig;
pub use token_ledger::TokenLedger;
