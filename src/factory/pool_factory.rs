//! Deterministic pool deployment and the token → pool registry.

use std::collections::BTreeMap;

use alloy_primitives::B256;
use tracing::{info, warn};

use crate::config::FactoryConfig;
use crate::deploy::AddressDeriver;
use crate::domain::{Address, CallContext, FactoryEvent};
use crate::error::VaultError;
use crate::pools::SingleAssetPool;
use crate::traits::FromConfig;

/// Deploys one [`SingleAssetPool`] per underlying token and owns the
/// registry of deployed pools.
///
/// Every pool lives at the address
/// [`AddressDeriver::pool_address`]`(factory, token, pool_code_hash)`, so
/// callers can compute it without asking the factory.  Registry entries
/// are write-once.
///
/// Pool creation and owner transfer are restricted to the current owner.
///
/// # Example
///
/// ```rust
/// use hydra_vault::config::FactoryConfig;
/// use hydra_vault::deploy::{pool_init_code_hash, AddressDeriver};
/// use hydra_vault::domain::{Address, CallContext};
/// use hydra_vault::error::VaultError;
/// use hydra_vault::factory::PoolFactory;
/// use hydra_vault::traits::FromConfig;
///
/// let factory_addr = Address::from_low_u8(0xfa);
/// let owner = Address::from_low_u8(1);
/// let token = Address::from_low_u8(0x10);
///
/// let cfg = FactoryConfig::new(factory_addr, owner).expect("valid config");
/// let mut factory = PoolFactory::from_config(&cfg).expect("factory");
///
/// let pool = factory.create_pool(&CallContext::new(owner, 0), token).expect("created");
/// assert_eq!(pool, AddressDeriver::pool_address(factory_addr, token, pool_init_code_hash()));
/// assert_eq!(factory.pool(&token), Some(pool));
/// assert_eq!(
///     factory.create_pool(&CallContext::new(owner, 0), token),
///     Err(VaultError::PoolExists)
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolFactory {
    address: Address,
    owner: Address,
    pool_code_hash: B256,
    pools: BTreeMap<Address, SingleAssetPool>,
    all_pools: Vec<Address>,
    events: Vec<FactoryEvent>,
}

impl FromConfig<FactoryConfig> for PoolFactory {
    fn from_config(config: &FactoryConfig) -> Result<Self, VaultError> {
        config.validate()?;
        Ok(Self {
            address: config.address(),
            owner: config.owner(),
            pool_code_hash: config.pool_code_hash(),
            pools: BTreeMap::new(),
            all_pools: Vec::new(),
            events: Vec::new(),
        })
    }
}

impl PoolFactory {
    /// Deploys the pool for `token` and registers it.
    ///
    /// # Flow
    ///
    /// 1. Check that the caller is the owner.
    /// 2. Reject the zero token and tokens that already have a pool.
    /// 3. Derive the pool address from `(factory, keccak256(token), code hash)`.
    /// 4. Bind a fresh pool to `(factory, token)` at that address.
    /// 5. Record it and emit [`FactoryEvent::PoolCreated`].
    ///
    /// # Errors
    ///
    /// - [`VaultError::Forbidden`] if the caller is not the owner.
    /// - [`VaultError::ZeroAddress`] if `token` is zero.
    /// - [`VaultError::PoolExists`] if `token` already has a pool.
    pub fn create_pool(&mut self, ctx: &CallContext, token: Address) -> Result<Address, VaultError> {
        self.ensure_owner(ctx, "create_pool")?;
        token.ensure_non_zero("token")?;
        if self.pools.contains_key(&token) {
            return Err(VaultError::PoolExists);
        }

        let pool = AddressDeriver::pool_address(self.address, token, self.pool_code_hash);
        self.pools
            .insert(token, SingleAssetPool::new(pool, self.address, token));
        self.all_pools.push(pool);
        let count = self.all_pools.len();
        self.events
            .push(FactoryEvent::PoolCreated { token, pool, count });

        info!(factory = %self.address, %token, %pool, count, "pool created");
        Ok(pool)
    }

    /// Hands the owner role to `new_owner`.
    ///
    /// The previous owner loses access immediately.
    ///
    /// # Errors
    ///
    /// - [`VaultError::Forbidden`] if the caller is not the owner.
    /// - [`VaultError::ZeroAddress`] if `new_owner` is zero.
    pub fn set_owner(&mut self, ctx: &CallContext, new_owner: Address) -> Result<(), VaultError> {
        self.ensure_owner(ctx, "set_owner")?;
        new_owner.ensure_non_zero("new owner")?;
        let previous = core::mem::replace(&mut self.owner, new_owner);
        self.events.push(FactoryEvent::OwnerChanged {
            previous,
            new_owner,
        });
        info!(factory = %self.address, %previous, %new_owner, "owner changed");
        Ok(())
    }

    /// Address of the pool for `token`, if one was created.
    #[must_use]
    pub fn pool(&self, token: &Address) -> Option<Address> {
        self.pools.get(token).map(SingleAssetPool::address)
    }

    /// Number of pools created.
    #[must_use]
    pub fn pools(&self) -> usize {
        self.all_pools.len()
    }

    /// Address of the `index`-th pool in creation order.
    #[must_use]
    pub fn all_pools(&self, index: usize) -> Option<Address> {
        self.all_pools.get(index).copied()
    }

    /// The pool for `token`.
    #[must_use]
    pub fn pool_for(&self, token: &Address) -> Option<&SingleAssetPool> {
        self.pools.get(token)
    }

    /// The pool for `token`, for mutating operations.
    pub fn pool_for_mut(&mut self, token: &Address) -> Option<&mut SingleAssetPool> {
        self.pools.get_mut(token)
    }

    /// Current owner.
    #[must_use]
    pub const fn owner(&self) -> Address {
        self.owner
    }

    /// The factory's own address.
    #[must_use]
    pub const fn address(&self) -> Address {
        self.address
    }

    /// Code hash used for pool address derivation.
    #[must_use]
    pub const fn pool_code_hash(&self) -> B256 {
        self.pool_code_hash
    }

    /// Events emitted so far, oldest first.
    #[must_use]
    pub fn events(&self) -> &[FactoryEvent] {
        &self.events
    }

    /// Drains the event log.
    pub fn take_events(&mut self) -> Vec<FactoryEvent> {
        core::mem::take(&mut self.events)
    }

    fn ensure_owner(&self, ctx: &CallContext, op: &'static str) -> Result<(), VaultError> {
        if ctx.sender() == self.owner {
            Ok(())
        } else {
            warn!(factory = %self.address, caller = %ctx.sender(), op, "caller is not the owner");
            Err(VaultError::Forbidden)
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::deploy::pool_init_code_hash;

    fn addr(s: &str) -> Address {
        let Ok(a) = s.parse() else {
            panic!("valid address literal");
        };
        a
    }

    fn wallet() -> Address {
        Address::from_low_u8(0x01)
    }

    fn other() -> Address {
        Address::from_low_u8(0x02)
    }

    fn factory_addr() -> Address {
        addr("0x5fbdb2315678afecb367f032d93f642f64180aa3")
    }

    fn test_token() -> Address {
        addr("0x1000000000000000000000000000000000000000")
    }

    fn as_wallet() -> CallContext {
        CallContext::new(wallet(), 0)
    }

    fn as_other() -> CallContext {
        CallContext::new(other(), 0)
    }

    fn make_factory() -> PoolFactory {
        let Ok(cfg) = FactoryConfig::new(factory_addr(), wallet()) else {
            panic!("valid config");
        };
        let Ok(factory) = PoolFactory::from_config(&cfg) else {
            panic!("valid factory");
        };
        factory
    }

    // -- construction ---------------------------------------------------------

    #[test]
    fn owner_and_empty_registry() {
        let factory = make_factory();
        assert_eq!(factory.owner(), wallet());
        assert_eq!(factory.pools(), 0);
        assert_eq!(factory.address(), factory_addr());
        assert_eq!(factory.pool_code_hash(), pool_init_code_hash());
        assert_eq!(factory.all_pools(0), None);
    }

    // -- create_pool ----------------------------------------------------------

    #[test]
    fn create_pool_at_derived_address() {
        let mut factory = make_factory();
        let expected = AddressDeriver::pool_address(factory_addr(), test_token(), pool_init_code_hash());

        let Ok(pool) = factory.create_pool(&as_wallet(), test_token()) else {
            panic!("expected Ok");
        };
        assert_eq!(pool, expected);
        assert_eq!(pool, addr("0xb9a752e55c63673d599ef527e2108c0f90ef8e03"));
        assert_eq!(factory.pool(&test_token()), Some(pool));
        assert_eq!(factory.pools(), 1);
        assert_eq!(factory.all_pools(0), Some(pool));
        assert_eq!(
            factory.events(),
            &[FactoryEvent::PoolCreated {
                token: test_token(),
                pool,
                count: 1,
            }]
        );

        let Some(deployed) = factory.pool_for(&test_token()) else {
            panic!("pool registered");
        };
        assert_eq!(deployed.factory(), factory_addr());
        assert_eq!(deployed.token(), test_token());
        assert_eq!(deployed.address(), pool);
    }

    #[test]
    fn create_pool_by_non_owner_is_forbidden() {
        let mut factory = make_factory();
        let before = factory.clone();
        assert_eq!(
            factory.create_pool(&as_other(), test_token()),
            Err(VaultError::Forbidden)
        );
        assert_eq!(factory, before);
    }

    #[test]
    fn create_pool_twice_fails() {
        let mut factory = make_factory();
        let Ok(pool) = factory.create_pool(&as_wallet(), test_token()) else {
            panic!("expected Ok");
        };
        let before = factory.clone();
        assert_eq!(
            factory.create_pool(&as_wallet(), test_token()),
            Err(VaultError::PoolExists)
        );
        assert_eq!(factory, before);
        assert_eq!(factory.pool(&test_token()), Some(pool));
    }

    #[test]
    fn create_pool_for_zero_token_fails() {
        let mut factory = make_factory();
        assert_eq!(
            factory.create_pool(&as_wallet(), Address::ZERO),
            Err(VaultError::ZeroAddress("token"))
        );
        assert_eq!(factory.pools(), 0);
    }

    #[test]
    fn forbidden_is_checked_before_duplicates() {
        let mut factory = make_factory();
        let Ok(_) = factory.create_pool(&as_wallet(), test_token()) else {
            panic!("expected Ok");
        };
        assert_eq!(
            factory.create_pool(&as_other(), test_token()),
            Err(VaultError::Forbidden)
        );
    }

    #[test]
    fn pools_enumerate_in_creation_order() {
        let mut factory = make_factory();
        let second = addr("0x2000000000000000000000000000000000000000");
        let Ok(a) = factory.create_pool(&as_wallet(), test_token()) else {
            panic!("expected Ok");
        };
        let Ok(b) = factory.create_pool(&as_wallet(), second) else {
            panic!("expected Ok");
        };
        assert_eq!(b, addr("0xc9126839c954c9a4e2e21276d6f1e2ce7be62590"));
        assert_eq!(factory.pools(), 2);
        assert_eq!(factory.all_pools(0), Some(a));
        assert_eq!(factory.all_pools(1), Some(b));
        assert_eq!(factory.all_pools(2), None);
    }

    #[test]
    fn custom_code_hash_moves_addresses() {
        let code_hash: B256 = {
            let Ok(h) = "0x299fc1dd996bb3989ecb29cbe15651bd653d7f3cba7229ed963bff23482465bc".parse()
            else {
                panic!("valid hash literal");
            };
            h
        };
        let Ok(cfg) = FactoryConfig::new(factory_addr(), wallet()) else {
            panic!("valid config");
        };
        let Ok(mut factory) = PoolFactory::from_config(&cfg.with_pool_code_hash(code_hash)) else {
            panic!("valid factory");
        };
        let Ok(pool) = factory.create_pool(&as_wallet(), test_token()) else {
            panic!("expected Ok");
        };
        assert_eq!(pool, addr("0x0b41cb9114d050d146529713020d924e22ffdcf1"));
    }

    // -- set_owner ------------------------------------------------------------

    #[test]
    fn set_owner_transfers_control() {
        let mut factory = make_factory();
        assert_eq!(
            factory.set_owner(&as_other(), other()),
            Err(VaultError::Forbidden)
        );
        let Ok(()) = factory.set_owner(&as_wallet(), other()) else {
            panic!("expected Ok");
        };
        assert_eq!(factory.owner(), other());
        assert_eq!(
            factory.set_owner(&as_wallet(), wallet()),
            Err(VaultError::Forbidden)
        );
        assert_eq!(
            factory.create_pool(&as_wallet(), test_token()),
            Err(VaultError::Forbidden)
        );
        assert!(factory.create_pool(&as_other(), test_token()).is_ok());
        assert_eq!(
            factory.events().first(),
            Some(&FactoryEvent::OwnerChanged {
                previous: wallet(),
                new_owner: other(),
            })
        );
    }

    #[test]
    fn set_owner_to_zero_rejected() {
        let mut factory = make_factory();
        assert_eq!(
            factory.set_owner(&as_wallet(), Address::ZERO),
            Err(VaultError::ZeroAddress("new owner"))
        );
        assert_eq!(factory.owner(), wallet());
        assert!(factory.events().is_empty());
    }

    #[test]
    fn take_events_drains_log() {
        let mut factory = make_factory();
        let Ok(_) = factory.create_pool(&as_wallet(), test_token()) else {
            panic!("expected Ok");
        };
        assert_eq!(factory.take_events().len(), 1);
        assert!(factory.events().is_empty());
    }
}
