//! Ledger Token Errors

use lib_types::{Address, Amount};
use thiserror::Error;

/// Error during ledger token operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Caller {0} is not the mint authority")]
    Unauthorized(Address),

    #[error("Minting is finished")]
    MintingClosed,

    #[error("Supply cap exceeded: cap {max}, would have {would_have}")]
    CapExceeded { max: Amount, would_have: Amount },

    #[error("Transfers are locked until minting is finished")]
    TradingLocked,

    #[error("The ledger does not accept bare value transfers")]
    ValueNotAccepted,

    #[error("Invalid token metadata: {0}")]
    InvalidMetadata(String),

    #[error("Insufficient balance: have {have}, need {need}")]
    InsufficientBalance { have: Amount, need: Amount },

    #[error("Insufficient allowance: have {have}, need {need}")]
    InsufficientAllowance { have: Amount, need: Amount },

    #[error("Arithmetic overflow")]
    Overflow,
}

/// Result type for ledger token operations
pub type TokenResult<T> = Result<T, TokenError>;
