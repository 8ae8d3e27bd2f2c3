//! Sale Phase Controller
//!
//! Mediates all minting on the crowdsale ledger by sale phase and owns
//! the vesting vault it creates at construction. The phase is derived
//! from the host-supplied current time on every call; nothing stores a
//! phase, so no transition can be missed.
//!
//! ```text
//!   now < start        start <= now < end        now >= end
//!  ┌───────────┐      ┌──────────────────┐      ┌──────────┐
//!  │    Pre    │ ───▶ │      Active      │ ───▶ │   Post   │
//!  └───────────┘      └──────────────────┘      └──────────┘
//!   owner minting      issuance external         owner minting,
//!   (direct/locked)    to this core              finish allowed
//! ```
//!
//! # Key Types
//!
//! - [`Crowdsale`]: the controller (window, owner, vault)
//! - [`Phase`]: pure function of `(now, start, end)`
//! - [`SaleError`]: one named kind per rejected precondition; nested
//!   ledger and vault rejections surface with their exact kind

pub mod crowdsale;
pub mod errors;
pub mod phase;

pub use crowdsale::Crowdsale;
pub use errors::{SaleError, SaleResult};
pub use phase::Phase;
