//! Sale Controller Errors

use lib_token::TokenError;
use lib_types::{Address, Timestamp};
use lib_vesting::VaultError;
use thiserror::Error;

use crate::phase::Phase;

/// Error during sale controller operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SaleError {
    #[error("Caller {0} is not the sale owner")]
    Unauthorized(Address),

    #[error("Operation not allowed in the {current} phase (requires {required})")]
    PhaseViolation { current: Phase, required: Phase },

    #[error("Sale window is empty: start {start} >= end {end}")]
    InvalidWindow { start: Timestamp, end: Timestamp },

    /// A ledger operation inside a controller call was rejected
    #[error(transparent)]
    Token(#[from] TokenError),

    /// A vault operation inside a controller call was rejected
    #[error(transparent)]
    Vault(#[from] VaultError),
}

/// Result type for sale controller operations
pub type SaleResult<T> = Result<T, SaleError>;
