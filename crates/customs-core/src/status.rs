//! # Validation Status Lattice
//!
//! Defines [`ValidationStatus`], the outcome of classifying one shipment
//! item against the HSN catalog and a destination's import policy.
//!
//! ```text
//! Ordering (best → worst): Valid < Restricted < Prohibited
//!
//! escalate(a, b) = max(a, b)
//! ```
//!
//! `Invalid` sits outside the escalation chain. It is produced only by the
//! format check and ends evaluation immediately, so no escalation step ever
//! sees it. For ordering purposes it ranks above `Prohibited` and is
//! absorbing under [`ValidationStatus::escalate`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification outcome for a single shipment item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationStatus {
    /// No restriction applies; the item may ship.
    Valid,
    /// The item may ship with extra documentation or clearance.
    Restricted,
    /// The item must not ship to this destination.
    Prohibited,
    /// The HSN code itself is malformed.
    Invalid,
}

impl ValidationStatus {
    /// Severity rank. Higher is worse.
    fn rank(self) -> u8 {
        match self {
            Self::Valid => 0,
            Self::Restricted => 1,
            Self::Prohibited => 2,
            Self::Invalid => 3,
        }
    }

    /// Returns the more severe of the two statuses.
    ///
    /// Escalation never downgrades: `Prohibited.escalate(Restricted)` is
    /// still `Prohibited`.
    pub fn escalate(self, other: Self) -> Self {
        if other.rank() > self.rank() {
            other
        } else {
            self
        }
    }

    /// Whether a shipment containing an item with this status may proceed.
    pub fn can_proceed(self) -> bool {
        matches!(self, Self::Valid | Self::Restricted)
    }

    /// Whether this status blocks submission.
    pub fn is_blocking(self) -> bool {
        !self.can_proceed()
    }

    /// Returns the snake_case identifier, matching the serde format.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Valid => "valid",
            Self::Restricted => "restricted",
            Self::Prohibited => "prohibited",
            Self::Invalid => "invalid",
        }
    }

    /// All statuses in ascending severity.
    pub fn all() -> &'static [ValidationStatus] {
        &[Self::Valid, Self::Restricted, Self::Prohibited, Self::Invalid]
    }
}

impl PartialOrd for ValidationStatus {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ValidationStatus {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl fmt::Display for ValidationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ValidationStatus::{Invalid, Prohibited, Restricted, Valid};

    #[test]
    fn test_escalate_takes_worse() {
        assert_eq!(Valid.escalate(Restricted), Restricted);
        assert_eq!(Restricted.escalate(Prohibited), Prohibited);
        assert_eq!(Valid.escalate(Valid), Valid);
    }

    #[test]
    fn test_escalate_never_downgrades() {
        assert_eq!(Prohibited.escalate(Restricted), Prohibited);
        assert_eq!(Prohibited.escalate(Valid), Prohibited);
        assert_eq!(Restricted.escalate(Valid), Restricted);
    }

    #[test]
    fn test_invalid_is_absorbing() {
        for s in ValidationStatus::all() {
            assert_eq!(Invalid.escalate(*s), Invalid);
            assert_eq!(s.escalate(Invalid), Invalid);
        }
    }

    #[test]
    fn test_can_proceed() {
        assert!(Valid.can_proceed());
        assert!(Restricted.can_proceed());
        assert!(!Prohibited.can_proceed());
        assert!(!Invalid.can_proceed());
        assert!(Prohibited.is_blocking());
    }

    #[test]
    fn test_ordering() {
        assert!(Valid < Restricted);
        assert!(Restricted < Prohibited);
        assert!(Prohibited < Invalid);
    }

    #[test]
    fn test_display_matches_serde() {
        for s in ValidationStatus::all() {
            assert_eq!(s.to_string(), s.as_str());
            assert_eq!(
                serde_json::to_string(s).unwrap(),
                format!("\"{}\"", s.as_str())
            );
        }
    }
}
