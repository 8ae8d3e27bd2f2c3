//! Crowdsale Ledger Token
//!
//! This crate defines the ledger token primitive for the issuance core.
//!
//! The token is minted through a capped, authority-gated issuance window
//! and becomes transferable only once minting is finished.
//!
//! # Key Types
//!
//! - [`CappedToken`]: the canonical ledger (balances, cap, mint authority)
//! - [`TokenError`]: one named kind per rejected precondition
//!
//! # Execution
//!
//! Every mutating operation takes the caller identity supplied by the
//! hosting substrate and either fully applies or fails with state
//! untouched. The substrate serializes calls; nothing here suspends or
//! interleaves.

pub mod contract;
pub mod errors;

pub use contract::CappedToken;
pub use errors::{TokenError, TokenResult};
