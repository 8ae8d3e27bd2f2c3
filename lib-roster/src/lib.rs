//! Access Roster
//!
//! A standalone, reusable permission primitive: an owner-curated set of
//! approved accounts. Upstream gating logic consults [`Roster::is_whitelisted`];
//! this crate takes no part in issuance itself.
//!
//! Every membership change appends exactly one [`RosterEvent`] for
//! external consumers, strictly after the mutation commits. Mutations are
//! idempotent: re-adding a member or removing an absent one succeeds
//! without an event.

pub mod errors;
pub mod roster;

pub use errors::{RosterError, RosterResult};
pub use roster::{Roster, RosterEvent};
