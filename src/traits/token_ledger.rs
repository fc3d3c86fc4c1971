//! Seam to the external fungible-token ledger.
//!
//! A pool never owns its underlying token's bookkeeping.  It reads its
//! live balance and pays out redemptions through a [`TokenLedger`] handed
//! to each call, which keeps the pool independent of where the token
//! actually lives (an in-memory [`Erc20Ledger`](crate::ledger::Erc20Ledger),
//! a chain client, a test double that misbehaves on purpose).

use crate::domain::{Address, Amount};
use crate::error::VaultError;

/// A fungible-token ledger for one token.
///
/// # Contract
///
/// - [`transfer`](TokenLedger::transfer) is atomic: on `Err` no balance
///   has changed.
/// - Balances never exceed [`total_supply`](TokenLedger::total_supply).
pub trait TokenLedger {
    /// Address of the token this ledger tracks.
    #[must_use]
    fn token(&self) -> Address;

    /// Total units in existence.
    #[must_use]
    fn total_supply(&self) -> Amount;

    /// Units held by `account`.
    #[must_use]
    fn balance_of(&self, account: &Address) -> Amount;

    /// Moves `amount` from `from` to `to`, authorised as `from`.
    ///
    /// # Errors
    ///
    /// - [`VaultError::ZeroAddress`] if `to` is the zero address.
    /// - [`VaultError::InsufficientBalance`] if `from` holds less than
    ///   `amount`.
    fn transfer(&mut self, from: &Address, to: &Address, amount: Amount) -> Result<(), VaultError>;
}
