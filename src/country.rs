//! Per-country policy table.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ConfigError;

/// Policy flags for one country.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryPolicy {
    /// Country code, when the source data repeats it inside the entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Medical advisory text; empty means no advisory.
    #[serde(default)]
    pub medical_advisory: String,

    /// Visitors from this country need a visa.
    #[serde(default, deserialize_with = "required_flag")]
    pub visitor_visa_required: bool,

    /// Travelers in transit from this country need a visa.
    #[serde(default, deserialize_with = "required_flag")]
    pub transit_visa_required: bool,
}

impl CountryPolicy {
    /// A policy with no advisory and no visa requirements.
    #[must_use]
    pub fn open() -> Self {
        Self::default()
    }

    /// Sets the medical advisory.
    #[must_use]
    pub fn with_advisory(mut self, advisory: impl Into<String>) -> Self {
        self.medical_advisory = advisory.into();
        self
    }

    /// Requires a visa for visitors.
    #[must_use]
    pub const fn with_visitor_visa(mut self) -> Self {
        self.visitor_visa_required = true;
        self
    }

    /// Requires a visa for transit.
    #[must_use]
    pub const fn with_transit_visa(mut self) -> Self {
        self.transit_visa_required = true;
        self
    }

    /// True if the country carries a medical advisory.
    #[must_use]
    pub fn has_advisory(&self) -> bool {
        !self.medical_advisory.is_empty()
    }
}

/// Source data encodes a required flag as the string `"1"`. Anything else,
/// including an absent key, means not required. A JSON `true` or `1` is
/// accepted as well.
fn required_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = serde_json::Value::deserialize(deserializer)?;
    Ok(match raw {
        serde_json::Value::String(s) => s == "1",
        serde_json::Value::Bool(b) => b,
        serde_json::Value::Number(n) => n.as_u64() == Some(1),
        _ => false,
    })
}

/// Country policies keyed by country code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CountryTable(HashMap<String, CountryPolicy>);

impl CountryTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a policy, builder style.
    #[must_use]
    pub fn with(mut self, code: impl Into<String>, policy: CountryPolicy) -> Self {
        self.insert(code, policy);
        self
    }

    /// Adds or replaces a policy.
    pub fn insert(&mut self, code: impl Into<String>, policy: CountryPolicy) -> Option<CountryPolicy> {
        self.0.insert(code.into(), policy)
    }

    /// Looks up a country. A miss is a configuration error.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownCountry` if `code` is not in the table.
    pub fn policy(&self, code: &str) -> Result<&CountryPolicy, ConfigError> {
        self.0.get(code).ok_or_else(|| ConfigError::UnknownCountry {
            code: code.to_string(),
        })
    }

    /// Number of countries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries sorted by code, for stable iteration.
    #[must_use]
    pub fn sorted(&self) -> Vec<(&str, &CountryPolicy)> {
        let mut entries: Vec<_> = self.0.iter().map(|(k, v)| (k.as_str(), v)).collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}
