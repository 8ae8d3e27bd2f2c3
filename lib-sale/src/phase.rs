//! Sale window phases
//!
//! Phase is a pure function of `(now, start, end)`, derived at every
//! entry point and never cached.

use serde::{Deserialize, Serialize};

use lib_types::Timestamp;

/// Sale lifecycle phase derived from the current time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Before the sale window opens
    Pre,
    /// Inside the sale window; issuance is driven outside this core
    Active,
    /// After the sale window closes
    Post,
}

impl Phase {
    /// Derive the phase for `now` against a `[start, end)` window.
    pub fn of(now: Timestamp, start: Timestamp, end: Timestamp) -> Self {
        if now < start {
            Phase::Pre
        } else if now < end {
            Phase::Active
        } else {
            Phase::Post
        }
    }

    pub fn is_pre(&self) -> bool {
        matches!(self, Phase::Pre)
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Phase::Active)
    }

    pub fn is_post(&self) -> bool {
        matches!(self, Phase::Post)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Pre => write!(f, "pre-sale"),
            Phase::Active => write!(f, "active"),
            Phase::Post => write!(f, "post-sale"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: Timestamp = 1_000;
    const END: Timestamp = 2_000;

    #[test]
    fn test_phase_boundaries() {
        assert_eq!(Phase::of(0, START, END), Phase::Pre);
        assert_eq!(Phase::of(START - 1, START, END), Phase::Pre);
        // Window open is inclusive, close is exclusive.
        assert_eq!(Phase::of(START, START, END), Phase::Active);
        assert_eq!(Phase::of(END - 1, START, END), Phase::Active);
        assert_eq!(Phase::of(END, START, END), Phase::Post);
        assert_eq!(Phase::of(END + 1_000_000, START, END), Phase::Post);
    }

    #[test]
    fn test_phase_predicates() {
        assert!(Phase::Pre.is_pre());
        assert!(!Phase::Pre.is_active());
        assert!(Phase::Active.is_active());
        assert!(Phase::Post.is_post());
        assert!(!Phase::Post.is_pre());
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(Phase::Pre.to_string(), "pre-sale");
        assert_eq!(Phase::Active.to_string(), "active");
        assert_eq!(Phase::Post.to_string(), "post-sale");
    }
}
