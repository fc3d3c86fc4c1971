//! Single-asset pool lifecycle example.
//!
//! Demonstrates deploying a factory and a pool at its deterministic
//! address, depositing from two accounts, accruing a donation, and
//! redeeming shares with `liquidity_to_burn`.
//!
//! # Run
//!
//! ```bash
//! RUST_LOG=debug cargo run --example vault_lifecycle
//! ```

use hydra_vault::config::FactoryConfig;
use hydra_vault::deploy::{pool_init_code_hash, AddressDeriver};
use hydra_vault::domain::{Address, Amount, CallContext};
use hydra_vault::factory::PoolFactory;
use hydra_vault::ledger::Erc20Ledger;
use hydra_vault::traits::{FromConfig, TokenLedger};

const E18: u128 = 1_000_000_000_000_000_000;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("=== Single-Asset Pool Lifecycle ===\n");

    // ── 1. Accounts and the underlying token ────────────────────────────
    let alice: Address = "0x17ec8597ff92c3f44523bdc65bf0f1be632917ff".parse()?;
    let bob: Address = "0x63fc2ad3d021a4af7689e5dc1b3f8da6ee9f3f4b".parse()?;
    let token: Address = "0x1000000000000000000000000000000000000000".parse()?;
    let factory_addr: Address = "0x5fbdb2315678afecb367f032d93f642f64180aa3".parse()?;

    let mut usd = Erc20Ledger::new(token, alice, Amount::new(10_000 * E18));
    usd.transfer(&alice, &bob, Amount::new(1_000 * E18))?;
    let as_alice = CallContext::new(alice, 1_700_000_000);
    let as_bob = as_alice.as_sender(bob);

    // ── 2. Predict, then deploy, the pool address ───────────────────────
    let predicted = AddressDeriver::pool_address(factory_addr, token, pool_init_code_hash());
    println!("Predicted pool address: {predicted}");

    let mut factory = PoolFactory::from_config(&FactoryConfig::new(factory_addr, alice)?)?;
    let pool_addr = factory.create_pool(&as_alice, token)?;
    println!("Deployed pool address:  {pool_addr}");
    println!("  Pools registered:     {}", factory.pools());

    let pool = factory
        .pool_for_mut(&token)
        .ok_or("pool missing from registry")?;

    // ── 3. First deposit sets the share scale ───────────────────────────
    usd.transfer(&alice, &pool_addr, Amount::new(4 * E18))?;
    let alice_shares = pool.mint(&as_alice, &usd, alice)?;
    println!("\n--- Alice deposits 4 tokens ---");
    println!("  Shares minted:  {alice_shares}");
    println!("  Reserves:       {}", pool.get_reserves());

    // ── 4. Later deposits are priced at the current ratio ───────────────
    usd.transfer(&bob, &pool_addr, Amount::new(4 * E18))?;
    let bob_shares = pool.mint(&as_bob.at(1_700_000_012), &usd, bob)?;
    println!("\n--- Bob deposits 4 tokens ---");
    println!("  Shares minted:  {bob_shares}");
    println!("  Total supply:   {}", pool.total_supply());

    // ── 5. A donation raises the value of every share ───────────────────
    usd.transfer(&alice, &pool_addr, Amount::new(2 * E18))?;
    pool.sync(&as_alice.at(1_700_000_024), &usd)?;
    println!("\n--- 2 tokens donated, then synced ---");
    println!("  Reserves:       {}", pool.get_reserves());

    // ── 6. Bob redeems exactly 3 tokens ─────────────────────────────────
    let target = Amount::new(3 * E18);
    let needed = pool.liquidity_to_burn(target)?;
    pool.transfer(&as_bob, pool_addr, needed)?;
    let paid = pool.burn(&as_bob.at(1_700_000_036), &mut usd, bob)?;
    println!("\n--- Bob redeems for {target} ---");
    println!("  Shares burned:  {needed}");
    println!("  Tokens paid:    {paid}");
    println!("  Bob's balance:  {}", usd.balance_of(&bob));

    // ── 7. Event log ────────────────────────────────────────────────────
    println!("\n--- Pool events ---");
    for event in pool.take_events() {
        println!("  {:<8} {event:?}", event.kind().to_string());
    }

    println!("\n--- Factory events ---");
    for event in factory.take_events() {
        println!("  {event:?}");
    }

    Ok(())
}
