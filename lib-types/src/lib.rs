//! Shared Primitives for the Crowdsale Issuance Core
//!
//! Fixed-size identifiers and arithmetic aliases used by every component
//! crate. A principal is an opaque 32-byte value assigned by the hosting
//! substrate; the core never interprets it.
//!
//! # Key Types
//!
//! - [`Address`]: opaque principal / component identifier
//! - [`Amount`]: token amounts
//! - [`Timestamp`], [`Duration`]: host-supplied time readings

pub mod primitives;

pub use primitives::{Address, Amount, Duration, Timestamp};
