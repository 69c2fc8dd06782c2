//! Resolution policies.
//!
//! `Strict` always runs every rule. `LegacyCitizenFirst` reproduces an older
//! rule order in which any traveler whose home country is the citizen
//! country was accepted before the medical and completeness checks ran.
//! It exists only for comparing against decisions made under that order.

use serde::{Deserialize, Serialize};

/// How the engine orders its rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResolutionPolicy {
    /// Quarantine, completeness, visa, watchlist, in that order, for everyone.
    #[default]
    Strict,

    /// Citizens are accepted before any rule runs.
    LegacyCitizenFirst,
}

impl ResolutionPolicy {
    /// Returns a short stable identifier suitable for logging/debugging.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::LegacyCitizenFirst => "legacy-citizen-first",
        }
    }

    /// Parses the identifier produced by [`ResolutionPolicy::name`].
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "strict" => Some(Self::Strict),
            "legacy-citizen-first" => Some(Self::LegacyCitizenFirst),
            _ => None,
        }
    }

    /// True if citizens bypass every rule under this policy.
    #[must_use]
    pub const fn citizens_bypass_rules(self) -> bool {
        matches!(self, Self::LegacyCitizenFirst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_strict() {
        assert_eq!(ResolutionPolicy::default(), ResolutionPolicy::Strict);
        assert!(!ResolutionPolicy::Strict.citizens_bypass_rules());
    }

    #[test]
    fn names_round_trip() {
        for policy in [ResolutionPolicy::Strict, ResolutionPolicy::LegacyCitizenFirst] {
            assert_eq!(ResolutionPolicy::from_name(policy.name()), Some(policy));
        }
        assert_eq!(ResolutionPolicy::from_name("lenient"), None);
    }

    #[test]
    fn serde_uses_kebab_case() {
        let policy: ResolutionPolicy = serde_json::from_str(r#""legacy-citizen-first""#).unwrap();
        assert_eq!(policy, ResolutionPolicy::LegacyCitizenFirst);
    }
}
