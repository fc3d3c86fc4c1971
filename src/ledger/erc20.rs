//! In-memory fungible-token ledger.

use std::collections::BTreeMap;

use crate::domain::{Address, Amount};
use crate::error::VaultError;
use crate::math::CheckedArithmetic;
use crate::traits::TokenLedger;

/// A completed token transfer, as a token contract would log it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenTransfer {
    /// Sender, or zero when units were created.
    pub from: Address,
    /// Recipient.
    pub to: Address,
    /// Units moved.
    pub value: Amount,
}

/// In-memory ledger of one fungible token.
///
/// The whole initial supply is credited to a single holder at
/// construction, the way a fixed-supply token is deployed.
///
/// # Example
///
/// ```rust
/// use hydra_vault::domain::{Address, Amount};
/// use hydra_vault::ledger::Erc20Ledger;
/// use hydra_vault::traits::TokenLedger;
///
/// let token  = Address::from_low_u8(0x10);
/// let wallet = Address::from_low_u8(0x01);
/// let pool   = Address::from_low_u8(0x02);
///
/// let mut ledger = Erc20Ledger::new(token, wallet, Amount::new(1_000));
/// ledger.transfer(&wallet, &pool, Amount::new(400)).expect("funded");
///
/// assert_eq!(ledger.balance_of(&pool), Amount::new(400));
/// assert_eq!(ledger.balance_of(&wallet), Amount::new(600));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Erc20Ledger {
    token: Address,
    total_supply: Amount,
    balances: BTreeMap<Address, Amount>,
    transfers: Vec<TokenTransfer>,
}

impl Erc20Ledger {
    /// Creates a ledger for `token` with `supply` units held by `holder`.
    #[must_use]
    pub fn new(token: Address, holder: Address, supply: Amount) -> Self {
        let mut balances = BTreeMap::new();
        if !supply.is_zero() {
            balances.insert(holder, supply);
        }
        Self {
            token,
            total_supply: supply,
            balances,
            transfers: vec![TokenTransfer {
                from: Address::ZERO,
                to: holder,
                value: supply,
            }],
        }
    }

    /// Creates `amount` new units for `to`.
    ///
    /// # Errors
    ///
    /// - [`VaultError::ZeroAddress`] if `to` is zero.
    /// - [`VaultError::Overflow`] if the supply would exceed `u128`.
    pub fn mint(&mut self, to: &Address, amount: Amount) -> Result<(), VaultError> {
        to.ensure_non_zero("token recipient")?;
        let supply = self.total_supply.safe_add(&amount)?;
        let balance = self.balance_of(to).safe_add(&amount)?;
        self.total_supply = supply;
        self.balances.insert(*to, balance);
        self.transfers.push(TokenTransfer {
            from: Address::ZERO,
            to: *to,
            value: amount,
        });
        Ok(())
    }

    /// Every transfer recorded so far, oldest first.
    #[must_use]
    pub fn transfers(&self) -> &[TokenTransfer] {
        &self.transfers
    }

    /// The most recent transfer, if any.
    #[must_use]
    pub fn last_transfer(&self) -> Option<&TokenTransfer> {
        self.transfers.last()
    }
}

impl TokenLedger for Erc20Ledger {
    fn token(&self) -> Address {
        self.token
    }

    fn total_supply(&self) -> Amount {
        self.total_supply
    }

    fn balance_of(&self, account: &Address) -> Amount {
        self.balances.get(account).copied().unwrap_or_default()
    }

    fn transfer(&mut self, from: &Address, to: &Address, amount: Amount) -> Result<(), VaultError> {
        to.ensure_non_zero("token recipient")?;
        let from_balance = self
            .balance_of(from)
            .safe_sub(&amount)
            .map_err(|_| VaultError::InsufficientBalance)?;
        if from != to {
            let to_balance = self.balance_of(to).safe_add(&amount)?;
            self.balances.insert(*from, from_balance);
            self.balances.insert(*to, to_balance);
        }
        self.transfers.push(TokenTransfer {
            from: *from,
            to: *to,
            value: amount,
        });
        Ok(())
    }
}
