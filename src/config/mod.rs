//! Factory configuration.
//!
//! [`FactoryConfig`] is the declarative blueprint from which a
//! [`PoolFactory`](crate::factory::PoolFactory) is built through
//! [`FromConfig`](crate::traits::FromConfig).

mod factory;

pub use factory::FactoryConfig;
