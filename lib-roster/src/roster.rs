//! Roster - owner-curated membership set
//!
//! Membership changes are the source of truth for external indexers:
//! each effective add or remove appends one notification record.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

use lib_types::Address;

use crate::errors::{RosterError, RosterResult};

/// Membership-change notification record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RosterEvent {
    /// Account entered the roster
    Added { account: Address },
    /// Account left the roster
    Removed { account: Address },
}

/// Owner-curated set of approved accounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    /// The only principal that may mutate membership, fixed at creation
    owner: Address,
    members: HashSet<Address>,
    /// Append-only notification record, one entry per effective change
    events: Vec<RosterEvent>,
}

impl Roster {
    pub fn new(owner: Address) -> Self {
        Self {
            owner,
            members: HashSet::new(),
            events: Vec::new(),
        }
    }

    /// Add `account` to the roster. Adding a present member is a no-op
    /// success. Returns whether membership changed.
    pub fn add(&mut self, caller: Address, account: Address) -> RosterResult<bool> {
        self.require_owner(caller)?;
        let changed = self.members.insert(account);
        if changed {
            self.events.push(RosterEvent::Added { account });
            debug!("Whitelisted {}", account);
        }
        Ok(changed)
    }

    /// Remove `account` from the roster. Removing an absent account is a
    /// no-op success. Returns whether membership changed.
    pub fn remove(&mut self, caller: Address, account: Address) -> RosterResult<bool> {
        self.require_owner(caller)?;
        let changed = self.members.remove(&account);
        if changed {
            self.events.push(RosterEvent::Removed { account });
            debug!("Removed {} from whitelist", account);
        }
        Ok(changed)
    }

    /// Whether `account` is currently approved. Callable by anyone.
    pub fn is_whitelisted(&self, account: Address) -> bool {
        self.members.contains(&account)
    }

    pub fn owner(&self) -> Address {
        self.owner
    }

    /// Number of approved accounts
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// The notification record, in emission order
    pub fn events(&self) -> &[RosterEvent] {
        &self.events
    }

    fn require_owner(&self, caller: Address) -> RosterResult<()> {
        if caller != self.owner {
            return Err(RosterError::Unauthorized(caller));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(fill: u8) -> Address {
        Address::new([fill; 32])
    }

    fn owner() -> Address {
        addr(1)
    }

    #[test]
    fn test_not_whitelisted_by_default() {
        let roster = Roster::new(owner());
        assert!(!roster.is_whitelisted(addr(2)));
        assert!(roster.is_empty());
    }

    #[test]
    fn test_owner_adds_member() {
        let mut roster = Roster::new(owner());
        let changed = roster.add(owner(), addr(2)).unwrap();
        assert!(changed);
        assert!(roster.is_whitelisted(addr(2)));
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn test_third_party_add_rejected() {
        let mut roster = Roster::new(owner());
        let result = roster.add(addr(9), addr(2));
        assert!(matches!(result, Err(RosterError::Unauthorized(_))));
        assert!(!roster.is_whitelisted(addr(2)));
        assert!(roster.events().is_empty());
    }

    #[test]
    fn test_add_emits_one_event() {
        let mut roster = Roster::new(owner());
        roster.add(owner(), addr(2)).unwrap();
        assert_eq!(roster.events(), &[RosterEvent::Added { account: addr(2) }]);
    }

    #[test]
    fn test_re_add_is_silent_noop() {
        let mut roster = Roster::new(owner());
        roster.add(owner(), addr(2)).unwrap();
        let changed = roster.add(owner(), addr(2)).unwrap();
        assert!(!changed);
        assert_eq!(roster.len(), 1);
        // Still exactly one notification.
        assert_eq!(roster.events().len(), 1);
    }

    #[test]
    fn test_owner_removes_member() {
        let mut roster = Roster::new(owner());
        roster.add(owner(), addr(2)).unwrap();
        let changed = roster.remove(owner(), addr(2)).unwrap();
        assert!(changed);
        assert!(!roster.is_whitelisted(addr(2)));
    }

    #[test]
    fn test_third_party_remove_rejected() {
        let mut roster = Roster::new(owner());
        roster.add(owner(), addr(2)).unwrap();
        let result = roster.remove(addr(9), addr(2));
        assert!(matches!(result, Err(RosterError::Unauthorized(_))));
        assert!(roster.is_whitelisted(addr(2)));
    }

    #[test]
    fn test_remove_emits_one_event() {
        let mut roster = Roster::new(owner());
        roster.add(owner(), addr(2)).unwrap();
        roster.remove(owner(), addr(2)).unwrap();
        assert_eq!(
            roster.events(),
            &[
                RosterEvent::Added { account: addr(2) },
                RosterEvent::Removed { account: addr(2) },
            ]
        );
    }

    #[test]
    fn test_remove_absent_is_silent_noop() {
        let mut roster = Roster::new(owner());
        let changed = roster.remove(owner(), addr(2)).unwrap();
        assert!(!changed);
        assert!(roster.events().is_empty());
    }

    #[test]
    fn test_anyone_can_check_membership() {
        let mut roster = Roster::new(owner());
        roster.add(owner(), addr(2)).unwrap();
        // No caller identity on reads at all; the check is open.
        assert!(roster.is_whitelisted(addr(2)));
        assert!(!roster.is_whitelisted(addr(3)));
    }

    #[test]
    fn test_event_serialization_roundtrip() {
        let event = RosterEvent::Added { account: addr(2) };
        let json = serde_json::to_string(&event).unwrap();
        let restored: RosterEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, restored);
    }

    #[test]
    fn test_state_serialization_roundtrip() {
        let mut roster = Roster::new(owner());
        roster.add(owner(), addr(2)).unwrap();
        roster.add(owner(), addr(3)).unwrap();
        roster.remove(owner(), addr(2)).unwrap();

        let bytes = bincode::serialize(&roster).unwrap();
        let restored: Roster = bincode::deserialize(&bytes).unwrap();
        assert_eq!(roster, restored);
    }
}
