//! Property-based tests using `proptest` for pool accounting invariants.
//!
//! 1. **Inverse consistency**: burning `liquidity_to_burn(a)` pays at least
//!    `a` and less than `a + ⌈R/S⌉`.
//! 2. **No dilution**: a deposit never lowers what existing shares redeem for.
//! 3. **Empty iff zero supply**: redeeming every share empties the reserve.
//! 4. **Sync idempotence**: a second sync changes nothing.

#![allow(clippy::panic)]

use proptest::prelude::*;

use super::SingleAssetPool;
use crate::domain::{Address, Amount, CallContext, Liquidity, Rounding};
use crate::error::VaultError;
use crate::ledger::Erc20Ledger;
use crate::math::mul_div;
use crate::traits::TokenLedger;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

const SUPPLY: u128 = 1_000_000_000_000_000_000_000_000_000_000;

fn wallet() -> Address {
    Address::from_low_u8(0x01)
}

fn newcomer() -> Address {
    Address::from_low_u8(0x02)
}

fn token() -> Address {
    Address::from_low_u8(0x10)
}

fn pool_addr() -> Address {
    Address::from_low_u8(0xa0)
}

fn ctx() -> CallContext {
    CallContext::new(wallet(), 1)
}

fn fresh() -> (SingleAssetPool, Erc20Ledger) {
    let pool = SingleAssetPool::new(pool_addr(), Address::from_low_u8(0xfa), token());
    let mut ledger = Erc20Ledger::new(token(), wallet(), Amount::new(SUPPLY));
    let Ok(()) = ledger.mint(&newcomer(), Amount::new(SUPPLY)) else {
        panic!("newcomer funded");
    };
    (pool, ledger)
}

fn deposit(
    pool: &mut SingleAssetPool,
    ledger: &mut Erc20Ledger,
    from: Address,
    amount: u128,
) -> Result<Liquidity, VaultError> {
    ledger.transfer(&from, &pool_addr(), Amount::new(amount))?;
    pool.mint(&ctx().as_sender(from), ledger, from)
}

fn redeem_value(pool: &SingleAssetPool, holder: &Address) -> u128 {
    let supply = pool.total_supply().get();
    if supply == 0 {
        return 0;
    }
    let Ok(v) = mul_div(
        pool.balance_of(holder).get(),
        pool.reserve().get(),
        supply,
        Rounding::Down,
    ) else {
        panic!("redeem value fits");
    };
    v
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Deposits from one unit up to a million 18-decimal tokens.
fn deposit_strategy() -> impl Strategy<Value = u128> {
    prop_oneof![
        1u128..=1_000_000u128,
        1_000_000u128..=1_000_000_000_000_000_000_000_000u128,
    ]
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_liquidity_to_burn_covers_target(
        first in deposit_strategy(),
        second in deposit_strategy(),
        frac in 1u32..=1_000u32,
    ) {
        let (mut pool, mut ledger) = fresh();
        let Ok(_) = deposit(&mut pool, &mut ledger, wallet(), first) else {
            return Ok(());
        };
        let Ok(_) = deposit(&mut pool, &mut ledger, wallet(), second) else {
            return Ok(());
        };

        let reserve = pool.reserve().get();
        let supply = pool.total_supply().get();
        let target = (reserve / 1_000 * u128::from(frac)).max(1);

        let Ok(shares) = pool.liquidity_to_burn(Amount::new(target)) else {
            panic!("target within reserve");
        };
        prop_assert!(shares <= pool.balance_of(&wallet()));

        let Ok(()) = pool.transfer(&ctx(), pool_addr(), shares) else {
            panic!("holder owns the shares");
        };
        let Ok(out) = pool.burn(&ctx(), &mut ledger, wallet()) else {
            panic!("burn of a positive payout");
        };

        let slack = reserve.div_ceil(supply);
        prop_assert!(out.get() >= target, "paid {} < target {}", out.get(), target);
        prop_assert!(
            out.get() <= target + slack,
            "paid {} > target {} + slack {}",
            out.get(), target, slack
        );
    }

    #[test]
    fn prop_deposit_never_dilutes_holders(
        first in deposit_strategy(),
        second in deposit_strategy(),
    ) {
        let (mut pool, mut ledger) = fresh();
        let Ok(_) = deposit(&mut pool, &mut ledger, wallet(), first) else {
            return Ok(());
        };
        let before = redeem_value(&pool, &wallet());

        if deposit(&mut pool, &mut ledger, newcomer(), second).is_err() {
            return Ok(());
        }
        let after = redeem_value(&pool, &wallet());
        prop_assert!(after >= before, "holder value fell: {} -> {}", before, after);
        prop_assert!(redeem_value(&pool, &newcomer()) <= second);
    }

    #[test]
    fn prop_redeeming_everything_empties_pool(
        deposits in proptest::collection::vec(deposit_strategy(), 1..5),
    ) {
        let (mut pool, mut ledger) = fresh();
        for amount in deposits {
            let _ = deposit(&mut pool, &mut ledger, wallet(), amount);
        }
        let held = pool.balance_of(&wallet());
        if held.is_zero() {
            return Ok(());
        }
        let Ok(()) = pool.transfer(&ctx(), pool_addr(), held) else {
            panic!("holder owns the shares");
        };
        let Ok(_) = pool.burn(&ctx(), &mut ledger, wallet()) else {
            panic!("burn of the whole supply");
        };
        prop_assert_eq!(pool.total_supply(), Liquidity::ZERO);
        prop_assert_eq!(pool.reserve(), Amount::ZERO);
        prop_assert_eq!(ledger.balance_of(&pool_addr()), Amount::ZERO);
    }

    #[test]
    fn prop_sync_is_idempotent(
        first in deposit_strategy(),
        donation in 0u128..=1_000_000u128,
    ) {
        let (mut pool, mut ledger) = fresh();
        let _ = deposit(&mut pool, &mut ledger, wallet(), first);
        if donation > 0 {
            let Ok(()) = ledger.transfer(&wallet(), &pool_addr(), Amount::new(donation)) else {
                panic!("wallet funded");
            };
        }
        let Ok(once) = pool.sync(&ctx(), &ledger) else {
            panic!("sync succeeds");
        };
        let snapshot = (pool.get_reserves(), pool.total_supply());
        let Ok(twice) = pool.sync(&ctx(), &ledger) else {
            panic!("sync succeeds");
        };
        prop_assert_eq!(once, twice);
        prop_assert_eq!((pool.get_reserves(), pool.total_supply()), snapshot);
    }
}
