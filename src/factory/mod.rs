//! Pool factory: deterministic deployment, registry, and access control.

mod pool_factory;

pub use pool_factory::PoolFactory;
