//! Decision labels and the precedence resolver.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The disposition of one traveler.
///
/// Variants are declared in ascending precedence, so the derived `Ord`
/// gives `Quarantine > Reject > Secondary > Accept`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Decision {
    /// Entry granted.
    Accept,
    /// Sent to secondary inspection.
    Secondary,
    /// Entry refused.
    Reject,
    /// Held for medical quarantine.
    Quarantine,
}

impl Decision {
    /// The label as written in decision lists.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Accept => "Accept",
            Self::Secondary => "Secondary",
            Self::Reject => "Reject",
            Self::Quarantine => "Quarantine",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Predicate outcomes for one record. The engine stops at the first rule
/// that fires, so at most one flag is set by it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleFlags {
    /// From or via a country with a medical advisory.
    pub quarantine: bool,
    /// Malformed passport or an empty field.
    pub incomplete: bool,
    /// A required visa is missing, malformed or expired.
    pub visa_invalid: bool,
    /// Matches a watchlist entry.
    pub on_watchlist: bool,
}

impl RuleFlags {
    /// Name of the highest-precedence rule that fired, if any.
    #[must_use]
    pub const fn reason(&self) -> Option<&'static str> {
        if self.quarantine {
            Some("medical_advisory")
        } else if self.incomplete {
            Some("incomplete_record")
        } else if self.visa_invalid {
            Some("invalid_visa")
        } else if self.on_watchlist {
            Some("watchlist")
        } else {
            None
        }
    }
}

/// Reduces the flags to one decision: Quarantine, then Reject (incomplete
/// record, then invalid visa), then Secondary, then Accept.
#[must_use]
pub const fn resolve(flags: &RuleFlags) -> Decision {
    if flags.quarantine {
        Decision::Quarantine
    } else if flags.incomplete || flags.visa_invalid {
        Decision::Reject
    } else if flags.on_watchlist {
        Decision::Secondary
    } else {
        Decision::Accept
    }
}
