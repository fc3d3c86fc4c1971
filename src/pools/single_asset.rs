//! Single-asset share pool (the accounting engine).
//!
//! A pool holds a reserve of one underlying token and issues shares
//! against it.  Deposits and redemptions follow a push-then-call pattern:
//! the caller first moves tokens (or shares) to the pool's address, then
//! calls [`mint`](SingleAssetPool::mint) (or
//! [`burn`](SingleAssetPool::burn)), which measures what arrived against
//! the recorded reserve.
//!
//! # Share Math
//!
//! With `R` the recorded reserve and `S` the outstanding shares:
//!
//! 1. First deposit (`S = 0`): `shares = ⌊√(amount_in × 10¹⁸)⌋`
//! 2. Later deposits: `shares = ⌊amount_in × S / R⌋`, using `R` before the
//!    deposit is added
//! 3. Redemption: `amount_out = ⌊shares × R / S⌋`
//! 4. Shares needed for a payout: `⌈amount_out × S / R⌉`
//!
//! Every product is evaluated with a 256-bit intermediate.
//!
//! # Ordering and Atomicity
//!
//! Mutating operations run under a per-pool lock and against a checkpoint
//! of the accounting state.  Shares and the reserve are updated before any
//! outbound token transfer, and if any step fails the checkpoint is
//! restored, so an `Err` leaves no trace (not even events).

use tracing::{debug, warn};

use super::ShareLedger;
use crate::domain::{
    Address, Amount, CallContext, Liquidity, PoolEvent, Reserves, Rounding,
};
use crate::error::VaultError;
use crate::math::{isqrt_scaled, mul_div, CheckedArithmetic};
use crate::traits::TokenLedger;

/// Scale applied to the first deposit before its square root is taken.
///
/// A first deposit of `4 × 10¹⁸` units (four whole 18-decimal tokens)
/// issues `2 × 10¹⁸` shares.
pub const INITIAL_SHARE_SCALE: u128 = 1_000_000_000_000_000_000;

/// Accounting state restored when an operation fails.
struct Checkpoint {
    reserve: Amount,
    block_timestamp_last: u32,
    shares: ShareLedger,
    events_len: usize,
}

/// A pool holding one underlying token and issuing shares against it.
///
/// Deployed by [`PoolFactory::create_pool`](crate::factory::PoolFactory::create_pool)
/// at a deterministic address; `factory` and `token` never change.
///
/// # Invariants
///
/// - `total_supply() == 0 ⇔ reserve == 0` after every mint and burn.
/// - `reserve` only changes through mint, burn, sync, and skim.
///
/// # Example
///
/// ```rust
/// use hydra_vault::config::FactoryConfig;
/// use hydra_vault::domain::{Address, Amount, CallContext, Liquidity};
/// use hydra_vault::factory::PoolFactory;
/// use hydra_vault::ledger::Erc20Ledger;
/// use hydra_vault::traits::{FromConfig, TokenLedger};
///
/// let owner  = Address::from_low_u8(1);
/// let token  = Address::from_low_u8(0x10);
/// let ctx    = CallContext::new(owner, 1_000);
/// let e18    = 1_000_000_000_000_000_000u128;
///
/// let cfg = FactoryConfig::new(Address::from_low_u8(0xfa), owner).expect("valid");
/// let mut factory = PoolFactory::from_config(&cfg).expect("factory");
/// let pool_addr = factory.create_pool(&ctx, token).expect("created");
///
/// let mut usd = Erc20Ledger::new(token, owner, Amount::new(10_000 * e18));
/// usd.transfer(&owner, &pool_addr, Amount::new(4 * e18)).expect("funded");
///
/// let pool = factory.pool_for_mut(&token).expect("registered");
/// let shares = pool.mint(&ctx, &usd, owner).expect("minted");
/// assert_eq!(shares, Liquidity::new(2 * e18));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleAssetPool {
    address: Address,
    factory: Address,
    token: Address,
    reserve: Amount,
    block_timestamp_last: u32,
    shares: ShareLedger,
    locked: bool,
    events: Vec<PoolEvent>,
}

impl SingleAssetPool {
    /// Binds a fresh, empty pool at `address` to `(factory, token)`.
    pub(crate) fn new(address: Address, factory: Address, token: Address) -> Self {
        Self {
            address,
            factory,
            token,
            reserve: Amount::ZERO,
            block_timestamp_last: 0,
            shares: ShareLedger::new(),
            locked: false,
            events: Vec::new(),
        }
    }

    /// The pool's own address (where deposits and shares are sent).
    #[must_use]
    pub const fn address(&self) -> Address {
        self.address
    }

    /// The factory that deployed this pool.
    #[must_use]
    pub const fn factory(&self) -> Address {
        self.factory
    }

    /// The underlying token.
    #[must_use]
    pub const fn token(&self) -> Address {
        self.token
    }

    /// Recorded reserve and the block time it was last synced.
    #[must_use]
    pub const fn get_reserves(&self) -> Reserves {
        Reserves::new(self.reserve, self.block_timestamp_last)
    }

    /// Recorded reserve.
    #[must_use]
    pub const fn reserve(&self) -> Amount {
        self.reserve
    }

    /// Events emitted so far, oldest first.
    #[must_use]
    pub fn events(&self) -> &[PoolEvent] {
        &self.events
    }

    /// Drains the event log.
    pub fn take_events(&mut self) -> Vec<PoolEvent> {
        core::mem::take(&mut self.events)
    }

    // -- share asset ----------------------------------------------------------

    /// Outstanding shares.
    #[must_use]
    pub const fn total_supply(&self) -> Liquidity {
        self.shares.total_supply()
    }

    /// Shares held by `holder`.
    #[must_use]
    pub fn balance_of(&self, holder: &Address) -> Liquidity {
        self.shares.balance_of(holder)
    }

    /// Shares `spender` may move on behalf of `owner`.
    #[must_use]
    pub fn allowance(&self, owner: &Address, spender: &Address) -> Liquidity {
        self.shares.allowance(owner, spender)
    }

    /// Moves `value` of the caller's shares to `to`.
    ///
    /// Sending shares to [`address`](Self::address) is how they are
    /// queued for [`burn`](Self::burn).
    ///
    /// # Errors
    ///
    /// - [`VaultError::ZeroAddress`] if `to` is zero.
    /// - [`VaultError::InsufficientBalance`] if the caller holds too few shares.
    pub fn transfer(
        &mut self,
        ctx: &CallContext,
        to: Address,
        value: Liquidity,
    ) -> Result<(), VaultError> {
        let from = ctx.sender();
        self.shares.transfer(&from, &to, value)?;
        self.events.push(PoolEvent::Transfer { from, to, value });
        Ok(())
    }

    /// Lets `spender` move up to `value` of the caller's shares.
    ///
    /// # Errors
    ///
    /// Returns [`VaultError::ZeroAddress`] if `spender` is zero.
    pub fn approve(
        &mut self,
        ctx: &CallContext,
        spender: Address,
        value: Liquidity,
    ) -> Result<(), VaultError> {
        let owner = ctx.sender();
        self.shares.approve(&owner, &spender, value)?;
        self.events.push(PoolEvent::Approval {
            owner,
            spender,
            value,
        });
        Ok(())
    }

    /// Moves `value` of `from`'s shares to `to` using the caller's allowance.
    ///
    /// # Errors
    ///
    /// - [`VaultError::InsufficientAllowance`] if the allowance is too low.
    /// - [`VaultError::InsufficientBalance`] if `from` holds too few shares.
    /// - [`VaultError::ZeroAddress`] if `to` is zero.
    pub fn transfer_from(
        &mut self,
        ctx: &CallContext,
        from: Address,
        to: Address,
        value: Liquidity,
    ) -> Result<(), VaultError> {
        let spender = ctx.sender();
        let mut shares = self.shares.clone();
        shares.spend_allowance(&from, &spender, value)?;
        shares.transfer(&from, &to, value)?;
        self.shares = shares;
        self.events.push(PoolEvent::Transfer { from, to, value });
        Ok(())
    }

    // -- accounting -----------------------------------------------------------

    /// Issues shares to `to` for the tokens sent to the pool since the last
    /// sync.
    ///
    /// The deposit is `live balance − reserve`.  Shares are priced at the
    /// reserve before the deposit; the reserve is then synced to the live
    /// balance.
    ///
    /// # Errors
    ///
    /// - [`VaultError::ZeroAddress`] if `to` is zero.
    /// - [`VaultError::InvalidRecipient`] if `to` is the pool itself.
    /// - [`VaultError::InvalidToken`] if `ledger` tracks another token.
    /// - [`VaultError::InsufficientLiquidityMinted`] if the deposit is worth
    ///   zero shares.
    /// - [`VaultError::Underflow`] if the live balance fell below the reserve.
    /// - [`VaultError::ZeroReserve`] if shares exist but the reserve is zero.
    /// - [`VaultError::Overflow`] if the share supply would exceed `u128`.
    /// - [`VaultError::Locked`] on a re-entrant call.
    pub fn mint<L>(
        &mut self,
        ctx: &CallContext,
        ledger: &L,
        to: Address,
    ) -> Result<Liquidity, VaultError>
    where
        L: TokenLedger + ?Sized,
    {
        self.guarded("mint", |pool| {
            pool.ensure_ledger(ledger)?;
            pool.ensure_recipient(to, "share recipient")?;

            let balance = ledger.balance_of(&pool.address);
            let amount_in = balance
                .safe_sub(&pool.reserve)
                .map_err(|_| VaultError::Underflow("live balance below recorded reserve"))?;

            let supply = pool.shares.total_supply();
            let liquidity = if supply.is_zero() {
                Liquidity::new(isqrt_scaled(amount_in.get(), INITIAL_SHARE_SCALE)?)
            } else {
                if pool.reserve.is_zero() {
                    return Err(VaultError::ZeroReserve);
                }
                Liquidity::new(mul_div(
                    amount_in.get(),
                    supply.get(),
                    pool.reserve.get(),
                    Rounding::Down,
                )?)
            };
            if liquidity.is_zero() {
                return Err(VaultError::InsufficientLiquidityMinted);
            }

            pool.shares.mint(&to, liquidity)?;
            pool.events.push(PoolEvent::Transfer {
                from: Address::ZERO,
                to,
                value: liquidity,
            });
            pool.update(balance, ctx.timestamp());
            pool.events.push(PoolEvent::Mint {
                sender: ctx.sender(),
                to,
                amount: amount_in,
            });

            debug!(
                pool = %pool.address,
                sender = %ctx.sender(),
                %to,
                %amount_in,
                %liquidity,
                reserve = %balance,
                "mint"
            );
            Ok(liquidity)
        })
    }

    /// Redeems every share held by the pool's own address and pays the
    /// proportional amount of the underlying token to `to`.
    ///
    /// The reserve is first reconciled to the live balance, so tokens sent
    /// to the pool outside the mint flow accrue to existing holders.
    ///
    /// # Errors
    ///
    /// - [`VaultError::ZeroAddress`] if `to` is zero.
    /// - [`VaultError::InvalidRecipient`] if `to` is the pool itself.
    /// - [`VaultError::InvalidToken`] if `ledger` tracks another token.
    /// - [`VaultError::InsufficientLiquidityBurned`] if the queued shares
    ///   are worth zero tokens.
    /// - Any error of the outbound [`TokenLedger::transfer`].
    /// - [`VaultError::Locked`] on a re-entrant call.
    pub fn burn<L>(
        &mut self,
        ctx: &CallContext,
        ledger: &mut L,
        to: Address,
    ) -> Result<Amount, VaultError>
    where
        L: TokenLedger + ?Sized,
    {
        self.guarded("burn", |pool| {
            pool.ensure_ledger(ledger)?;
            pool.ensure_recipient(to, "payout recipient")?;

            let this = pool.address;
            let reserve = ledger.balance_of(&this);
            let liquidity = pool.shares.balance_of(&this);
            let supply = pool.shares.total_supply();
            if supply.is_zero() {
                return Err(VaultError::InsufficientLiquidityBurned);
            }
            let amount_out = Amount::new(mul_div(
                liquidity.get(),
                reserve.get(),
                supply.get(),
                Rounding::Down,
            )?);
            if amount_out.is_zero() {
                return Err(VaultError::InsufficientLiquidityBurned);
            }

            // Effects before the outbound transfer.
            pool.shares.burn(&this, liquidity)?;
            pool.events.push(PoolEvent::Transfer {
                from: this,
                to: Address::ZERO,
                value: liquidity,
            });
            let remaining = reserve.safe_sub(&amount_out)?;
            pool.update(remaining, ctx.timestamp());
            pool.events.push(PoolEvent::Burn {
                sender: ctx.sender(),
                amount: amount_out,
                to,
            });

            ledger.transfer(&this, &to, amount_out)?;

            let settled = ledger.balance_of(&this);
            if settled != remaining {
                pool.update(settled, ctx.timestamp());
            }

            debug!(
                pool = %this,
                sender = %ctx.sender(),
                %to,
                %liquidity,
                %amount_out,
                reserve = %settled,
                "burn"
            );
            Ok(amount_out)
        })
    }

    /// Shares that must be burned to receive at least `amount_out` tokens.
    ///
    /// Rounds up, so burning the returned quantity never pays less than
    /// `amount_out`.  Computed against the recorded reserve; a request above
    /// the reserve yields more shares than are outstanding.
    ///
    /// # Errors
    ///
    /// - [`VaultError::ZeroReserve`] if the pool is empty.
    /// - [`VaultError::Overflow`] if the share count exceeds `u128`.
    pub fn liquidity_to_burn(&self, amount_out: Amount) -> Result<Liquidity, VaultError> {
        if self.reserve.is_zero() {
            return Err(VaultError::ZeroReserve);
        }
        mul_div(
            amount_out.get(),
            self.shares.total_supply().get(),
            self.reserve.get(),
            Rounding::Up,
        )
        .map(Liquidity::new)
    }

    /// Reconciles the recorded reserve to the live balance.
    ///
    /// Issues and burns nothing.  Calling it twice with no transfer in
    /// between leaves the reserve unchanged.
    ///
    /// # Errors
    ///
    /// - [`VaultError::InvalidToken`] if `ledger` tracks another token.
    /// - [`VaultError::Locked`] on a re-entrant call.
    pub fn sync<L>(&mut self, ctx: &CallContext, ledger: &L) -> Result<Amount, VaultError>
    where
        L: TokenLedger + ?Sized,
    {
        self.guarded("sync", |pool| {
            pool.ensure_ledger(ledger)?;
            let balance = ledger.balance_of(&pool.address);
            pool.update(balance, ctx.timestamp());
            debug!(pool = %pool.address, reserve = %balance, "sync");
            Ok(balance)
        })
    }

    /// Sends any live balance above the recorded reserve to `to`.
    ///
    /// Returns the amount swept, which is zero when nothing is in excess.
    ///
    /// # Errors
    ///
    /// - [`VaultError::ZeroAddress`] if `to` is zero.
    /// - [`VaultError::InvalidRecipient`] if `to` is the pool itself.
    /// - [`VaultError::InvalidToken`] if `ledger` tracks another token.
    /// - [`VaultError::Underflow`] if the live balance fell below the reserve.
    /// - Any error of the outbound [`TokenLedger::transfer`].
    /// - [`VaultError::Locked`] on a re-entrant call.
    pub fn skim<L>(
        &mut self,
        ctx: &CallContext,
        ledger: &mut L,
        to: Address,
    ) -> Result<Amount, VaultError>
    where
        L: TokenLedger + ?Sized,
    {
        self.guarded("skim", |pool| {
            pool.ensure_ledger(ledger)?;
            pool.ensure_recipient(to, "skim recipient")?;
            let this = pool.address;
            let excess = ledger
                .balance_of(&this)
                .safe_sub(&pool.reserve)
                .map_err(|_| VaultError::Underflow("live balance below recorded reserve"))?;
            if excess.is_zero() {
                return Ok(Amount::ZERO);
            }
            pool.events.push(PoolEvent::Skim { to, amount: excess });
            ledger.transfer(&this, &to, excess)?;
            debug!(pool = %this, sender = %ctx.sender(), %to, %excess, "skim");
            Ok(excess)
        })
    }

    // -- internals ------------------------------------------------------------

    fn ensure_ledger<L: TokenLedger + ?Sized>(&self, ledger: &L) -> Result<(), VaultError> {
        if ledger.token() == self.token {
            Ok(())
        } else {
            Err(VaultError::InvalidToken(
                "ledger does not track the pool's token",
            ))
        }
    }

    /// Shares minted to the pool would be burnable by anyone, and tokens
    /// paid to it never leave the reserve.
    fn ensure_recipient(&self, to: Address, what: &'static str) -> Result<(), VaultError> {
        to.ensure_non_zero(what)?;
        if to == self.address {
            return Err(VaultError::InvalidRecipient(what));
        }
        Ok(())
    }

    fn update(&mut self, balance: Amount, timestamp: u32) {
        self.reserve = balance;
        self.block_timestamp_last = timestamp;
        self.events.push(PoolEvent::Sync { reserve: balance });
    }

    fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            reserve: self.reserve,
            block_timestamp_last: self.block_timestamp_last,
            shares: self.shares.clone(),
            events_len: self.events.len(),
        }
    }

    fn restore(&mut self, checkpoint: Checkpoint) {
        self.reserve = checkpoint.reserve;
        self.block_timestamp_last = checkpoint.block_timestamp_last;
        self.shares = checkpoint.shares;
        self.events.truncate(checkpoint.events_len);
    }

    /// Runs `body` holding the pool lock; restores the checkpoint on `Err`.
    ///
    /// The lock is released on every exit path.
    fn guarded<T, F>(&mut self, op: &'static str, body: F) -> Result<T, VaultError>
    where
        F: FnOnce(&mut Self) -> Result<T, VaultError>,
    {
        if self.locked {
            warn!(pool = %self.address, op, "re-entrant call rejected");
            return Err(VaultError::Locked);
        }
        let checkpoint = self.checkpoint();
        self.locked = true;
        let result = body(self);
        self.locked = false;
        if let Err(err) = &result {
            debug!(pool = %self.address, op, error = %err, "rolled back");
            self.restore(checkpoint);
        }
        result
    }
}
