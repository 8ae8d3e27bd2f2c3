//! Vesting Vault Errors

use lib_token::TokenError;
use lib_types::{Address, Amount, Timestamp};
use thiserror::Error;

/// Error during vesting vault operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VaultError {
    #[error("Caller {0} may not administer this vault")]
    Unauthorized(Address),

    #[error("Vault is locked until {unlock_time} (now {now})")]
    Locked { unlock_time: Timestamp, now: Timestamp },

    #[error("Vault already unlocked at {unlock_time} (now {now})")]
    Unlocked { unlock_time: Timestamp, now: Timestamp },

    #[error("Vault holds too few tokens: available {available}, requested {requested}")]
    InsufficientFunds { available: Amount, requested: Amount },

    #[error("Unlock time may only decrease: current {current}, requested {requested}")]
    InvalidExtension { current: Timestamp, requested: Timestamp },

    /// A ledger operation inside a vault call was rejected
    #[error(transparent)]
    Token(#[from] TokenError),
}

/// Result type for vesting vault operations
pub type VaultResult<T> = Result<T, VaultError>;
