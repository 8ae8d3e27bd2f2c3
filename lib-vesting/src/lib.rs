//! Time-Locked Vesting Vault
//!
//! Custody component for minted-but-locked tokens. The vault holds tokens
//! credited to its own ledger balance, records who they vest for, and
//! releases them once the unlock deadline passes. The deadline can shrink,
//! never grow.
//!
//! # Key Types
//!
//! - [`TokenVault`]: per-beneficiary locked-balance ledger with a deadline
//! - [`VaultError`]: one named kind per rejected precondition

pub mod errors;
pub mod vault;

pub use errors::{VaultError, VaultResult};
pub use vault::TokenVault;
