//! Bookkeeping for a pool's own shares.

use std::collections::BTreeMap;

use crate::domain::{Address, Liquidity};
use crate::error::VaultError;
use crate::math::CheckedArithmetic;

/// Balances, allowances, and total supply of one pool's shares.
///
/// Pure bookkeeping: it neither emits events nor checks who is calling.
/// [`SingleAssetPool`](super::SingleAssetPool) wraps it, authorises calls
/// from the [`CallContext`](crate::domain::CallContext), and logs the
/// resulting transfers.  Every method is atomic: on `Err` nothing changed.
///
/// Invariant: `total_supply == Σ balances`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShareLedger {
    total_supply: Liquidity,
    balances: BTreeMap<Address, Liquidity>,
    allowances: BTreeMap<(Address, Address), Liquidity>,
}

impl ShareLedger {
    /// An empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Outstanding shares.
    #[must_use]
    pub const fn total_supply(&self) -> Liquidity {
        self.total_supply
    }

    /// Shares held by `holder`.
    #[must_use]
    pub fn balance_of(&self, holder: &Address) -> Liquidity {
        self.balances.get(holder).copied().unwrap_or_default()
    }

    /// Shares `spender` may move on behalf of `owner`.
    #[must_use]
    pub fn allowance(&self, owner: &Address, spender: &Address) -> Liquidity {
        self.allowances
            .get(&(*owner, *spender))
            .copied()
            .unwrap_or_default()
    }

    /// Issues `value` new shares to `to`.
    ///
    /// # Errors
    ///
    /// - [`VaultError::ZeroAddress`] if `to` is zero.
    /// - [`VaultError::Overflow`] if the supply would exceed `u128`.
    pub fn mint(&mut self, to: &Address, value: Liquidity) -> Result<(), VaultError> {
        to.ensure_non_zero("share recipient")?;
        let supply = self.total_supply.safe_add(&value)?;
        let balance = self.balance_of(to).safe_add(&value)?;
        self.total_supply = supply;
        self.set_balance(*to, balance);
        Ok(())
    }

    /// Destroys `value` shares held by `from`.
    ///
    /// # Errors
    ///
    /// Returns [`VaultError::InsufficientBalance`] if `from` holds fewer
    /// than `value` shares.
    pub fn burn(&mut self, from: &Address, value: Liquidity) -> Result<(), VaultError> {
        let balance = self
            .balance_of(from)
            .safe_sub(&value)
            .map_err(|_| VaultError::InsufficientBalance)?;
        let supply = self.total_supply.safe_sub(&value)?;
        self.total_supply = supply;
        self.set_balance(*from, balance);
        Ok(())
    }

    /// Moves `value` shares from `from` to `to`.
    ///
    /// # Errors
    ///
    /// - [`VaultError::ZeroAddress`] if `to` is zero.
    /// - [`VaultError::InsufficientBalance`] if `from` holds too few shares.
    pub fn transfer(
        &mut self,
        from: &Address,
        to: &Address,
        value: Liquidity,
    ) -> Result<(), VaultError> {
        to.ensure_non_zero("share recipient")?;
        let from_balance = self
            .balance_of(from)
            .safe_sub(&value)
            .map_err(|_| VaultError::InsufficientBalance)?;
        if from != to {
            let to_balance = self.balance_of(to).safe_add(&value)?;
            self.set_balance(*from, from_balance);
            self.set_balance(*to, to_balance);
        }
        Ok(())
    }

    /// Sets the allowance of `spender` over `owner`'s shares.
    ///
    /// # Errors
    ///
    /// Returns [`VaultError::ZeroAddress`] if `spender` is zero.
    pub fn approve(
        &mut self,
        owner: &Address,
        spender: &Address,
        value: Liquidity,
    ) -> Result<(), VaultError> {
        spender.ensure_non_zero("share spender")?;
        if value.is_zero() {
            self.allowances.remove(&(*owner, *spender));
        } else {
            self.allowances.insert((*owner, *spender), value);
        }
        Ok(())
    }

    /// Consumes `value` of `spender`'s allowance over `owner`'s shares.
    ///
    /// An allowance of [`Liquidity::MAX`] is treated as unlimited and is
    /// left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`VaultError::InsufficientAllowance`] if the allowance is
    /// below `value`.
    pub fn spend_allowance(
        &mut self,
        owner: &Address,
        spender: &Address,
        value: Liquidity,
    ) -> Result<(), VaultError> {
        let current = self.allowance(owner, spender);
        if current == Liquidity::MAX {
            return Ok(());
        }
        let remaining = current
            .safe_sub(&value)
            .map_err(|_| VaultError::InsufficientAllowance)?;
        self.approve(owner, spender, remaining)
    }

    fn set_balance(&mut self, holder: Address, balance: Liquidity) {
        if balance.is_zero() {
            self.balances.remove(&holder);
        } else {
            self.balances.insert(holder, balance);
        }
    }
}
