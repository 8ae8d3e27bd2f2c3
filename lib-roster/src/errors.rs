//! Access Roster Errors

use lib_types::Address;
use thiserror::Error;

/// Error during roster operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    #[error("Caller {0} is not the roster owner")]
    Unauthorized(Address),
}

/// Result type for roster operations
pub type RosterResult<T> = Result<T, RosterError>;
