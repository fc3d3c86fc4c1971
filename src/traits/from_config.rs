//! Generic construction trait for configuration-driven instantiation.
//!
//! [`FromConfig`] provides a uniform interface for building a component
//! from its validated configuration struct, e.g.
//! [`PoolFactory`](crate::factory::PoolFactory) from
//! [`FactoryConfig`](crate::config::FactoryConfig).
//!
//! # Validation Contract
//!
//! Implementations **must** re-validate the configuration.  A successfully
//! constructed value is guaranteed to be in a valid initial state.

use crate::error::VaultError;

/// Builds `Self` from a configuration of type `C`.
///
/// # Errors
///
/// Returns [`VaultError::InvalidConfiguration`] (or a more specific
/// variant such as [`VaultError::ZeroAddress`]) if the configuration is
/// invalid.
pub trait FromConfig<C> {
    /// Creates a new instance from the given configuration.
    ///
    /// # Errors
    ///
    /// Propagates any validation failure of `config`.
    fn from_config(config: &C) -> Result<Self, VaultError>
    where
        Self: Sized;
}
