//! Unified error types for the Hydra Vault library.
//!
//! All fallible operations across the crate return [`VaultError`] as their
//! error type.  A failed operation never leaves partial state behind: pools
//! and the factory restore their pre-call snapshot before the error is
//! surfaced, so callers can treat every `Err` as "nothing happened".

use thiserror::Error;

/// Error returned by every fallible vault, factory, and ledger operation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VaultError {
    /// The caller does not hold the role required by the operation.
    #[error("forbidden: caller is not the owner")]
    Forbidden,

    /// A pool is already registered for the requested token.
    #[error("pool already exists for token")]
    PoolExists,

    /// The deposit was too small to be worth a single share.
    #[error("insufficient liquidity minted")]
    InsufficientLiquidityMinted,

    /// The shares sent to the pool are worth zero tokens.
    #[error("insufficient liquidity burned")]
    InsufficientLiquidityBurned,

    /// A ledger account does not hold enough units for a transfer.
    #[error("insufficient balance")]
    InsufficientBalance,

    /// A spender's allowance does not cover a delegated transfer.
    #[error("insufficient allowance")]
    InsufficientAllowance,

    /// The zero address was supplied where a real account is required.
    #[error("zero address: {0}")]
    ZeroAddress(&'static str),

    /// The pool's own address was supplied as a recipient.
    #[error("invalid recipient: {0}")]
    InvalidRecipient(&'static str),

    /// The token ledger handed to a pool does not belong to that pool.
    #[error("invalid token: {0}")]
    InvalidToken(&'static str),

    /// A state-mutating pool call was entered while another one was running.
    #[error("pool is locked")]
    Locked,

    /// The operation needs a non-zero reserve.
    #[error("pool reserve is zero")]
    ZeroReserve,

    /// Division by zero in an arithmetic helper.
    #[error("division by zero")]
    DivisionByZero,

    /// Arithmetic overflow.
    #[error("overflow: {0}")]
    Overflow(&'static str),

    /// Arithmetic underflow.
    #[error("underflow: {0}")]
    Underflow(&'static str),

    /// A configuration value failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
}
