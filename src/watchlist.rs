//! Watchlist reference data.
//!
//! Entries are canonicalized to upper case when the watchlist is built (or
//! deserialized), so a lookup only has to canonicalize the traveler side.

use serde::{Deserialize, Serialize};

/// One person of interest.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WatchlistEntry {
    /// Passport number.
    #[serde(default)]
    pub passport: String,
    /// Given name.
    #[serde(default)]
    pub first_name: String,
    /// Family name.
    #[serde(default)]
    pub last_name: String,
}

impl WatchlistEntry {
    /// Creates an entry, canonicalized to upper case.
    #[must_use]
    pub fn new(
        passport: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            passport: passport.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
        .canonicalized()
    }

    /// Returns the entry with every field in upper case.
    #[must_use]
    pub fn canonicalized(self) -> Self {
        Self {
            passport: self.passport.to_uppercase(),
            first_name: self.first_name.to_uppercase(),
            last_name: self.last_name.to_uppercase(),
        }
    }

    /// Passport match against an already upper-cased passport.
    fn matches_passport(&self, passport: &str) -> bool {
        self.passport == passport
    }

    /// Full-name match against already upper-cased names. Both must match.
    fn matches_name(&self, first_name: &str, last_name: &str) -> bool {
        self.first_name == first_name && self.last_name == last_name
    }
}

/// Ordered list of watchlist entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Watchlist(Vec<WatchlistEntry>);

impl Watchlist {
    /// Builds a watchlist, canonicalizing every entry.
    #[must_use]
    pub fn new(entries: Vec<WatchlistEntry>) -> Self {
        Self(entries.into_iter().map(WatchlistEntry::canonicalized).collect())
    }

    /// Returns the entries as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[WatchlistEntry] {
        &self.0
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the watchlist has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True if any entry matches the traveler by passport, or by first AND
    /// last name on the same entry. Comparison is case-insensitive.
    #[must_use]
    pub fn contains(&self, passport: &str, first_name: &str, last_name: &str) -> bool {
        let passport = passport.to_uppercase();
        let first_name = first_name.to_uppercase();
        let last_name = last_name.to_uppercase();
        self.0.iter().any(|entry| {
            entry.matches_passport(&passport) || entry.matches_name(&first_name, &last_name)
        })
    }
}

impl<'de> Deserialize<'de> for Watchlist {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = Vec::<WatchlistEntry>::deserialize(deserializer)?;
        Ok(Watchlist::new(raw))
    }
}

impl FromIterator<WatchlistEntry> for Watchlist {
    fn from_iter<I: IntoIterator<Item = WatchlistEntry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
