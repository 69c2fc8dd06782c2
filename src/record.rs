//! Traveler records.
//!
//! A record is a flat mapping from field name to value. Only a handful of
//! keys are read by the rules; every other text field takes part in the
//! empty-string completeness scan and nothing else. Nested objects
//! (`home`, `from`, `via`, `visa`) are string-to-string mappings.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Field keys read by the rules.
pub mod keys {
    /// Passport number.
    pub const PASSPORT: &str = "passport";
    /// Given name.
    pub const FIRST_NAME: &str = "first_name";
    /// Family name.
    pub const LAST_NAME: &str = "last_name";
    /// Stated purpose of entry.
    pub const ENTRY_REASON: &str = "entry_reason";
    /// Home location object.
    pub const HOME: &str = "home";
    /// Origin location object.
    pub const FROM: &str = "from";
    /// Optional transit location object.
    pub const VIA: &str = "via";
    /// Optional visa object.
    pub const VISA: &str = "visa";
    /// Country code inside a location object.
    pub const COUNTRY: &str = "country";
    /// Visa code inside the visa object.
    pub const CODE: &str = "code";
    /// Visa issue date inside the visa object.
    pub const DATE: &str = "date";
}

/// A single value in a traveler record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Plain string field.
    Text(String),

    /// Nested object of string fields (locations, visa).
    Map(BTreeMap<String, String>),

    /// Anything else (`null`, numbers, deeper nesting). Never inspected.
    Other(serde_json::Value),
}

impl FieldValue {
    /// Returns the string if this is a text field.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the nested mapping if this is an object of strings.
    #[must_use]
    pub const fn as_map(&self) -> Option<&BTreeMap<String, String>> {
        match self {
            Self::Map(m) => Some(m),
            _ => None,
        }
    }

    /// JSON `null` counts as an absent field.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Other(serde_json::Value::Null))
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// The traveler's stated purpose of entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntryReason {
    /// Citizen coming home.
    Returning,
    /// Visitor.
    Visit,
    /// Passing through.
    Transit,
    /// Any other value, including an absent field (empty string).
    Other(String),
}

impl EntryReason {
    /// Parses the raw field value. Matching is exact.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "returning" => Self::Returning,
            "visit" => Self::Visit,
            "transit" => Self::Transit,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for EntryReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Returning => f.write_str("returning"),
            Self::Visit => f.write_str("visit"),
            Self::Transit => f.write_str("transit"),
            Self::Other(s) => f.write_str(s),
        }
    }
}

/// Borrowed view of a location object (`home`, `from` or `via`).
#[derive(Debug, Clone, Copy)]
pub struct Location<'a> {
    key: &'static str,
    fields: &'a BTreeMap<String, String>,
}

impl<'a> Location<'a> {
    /// The country code. A location without one cannot be evaluated.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingField` naming `<location>.country`.
    pub fn country(&self) -> Result<&'a str, ConfigError> {
        self.fields
            .get(keys::COUNTRY)
            .map(String::as_str)
            .ok_or_else(|| ConfigError::missing(format!("{}.{}", self.key, keys::COUNTRY)))
    }

    /// True if any value in the object is the empty string.
    #[must_use]
    pub fn has_empty_value(&self) -> bool {
        self.fields.values().any(String::is_empty)
    }
}

/// Borrowed view of a visa object.
///
/// A visa that is present but not an object, or that lacks a code or date,
/// exposes `None` for the missing parts; the visa rule treats that as an
/// invalid visa rather than an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct Visa<'a> {
    /// Visa code, expected as `XXXXX-XXXXX`.
    pub code: Option<&'a str>,
    /// Issue date, expected as `YYYY-MM-DD`.
    pub date: Option<&'a str>,
}

/// One traveler record under decision.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TravelerRecord {
    fields: BTreeMap<String, FieldValue>,
}

impl TravelerRecord {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder for a record.
    #[must_use]
    pub fn builder() -> TravelerRecordBuilder {
        TravelerRecordBuilder::default()
    }

    /// Returns the raw value for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    /// Sets `key`, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Option<FieldValue> {
        self.fields.insert(key.into(), value.into())
    }

    /// Removes `key`, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<FieldValue> {
        self.fields.remove(key)
    }

    /// Iterates over every top-level field in key order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// A required text field.
    ///
    /// # Errors
    ///
    /// `MissingField` if absent or `null`, `InvalidField` if not a string.
    pub fn text(&self, key: &str) -> Result<&str, ConfigError> {
        match self.fields.get(key) {
            None => Err(ConfigError::missing(key)),
            Some(v) if v.is_null() => Err(ConfigError::missing(key)),
            Some(v) => v
                .as_text()
                .ok_or_else(|| ConfigError::invalid(key, "expected a string")),
        }
    }

    /// Passport number.
    ///
    /// # Errors
    ///
    /// See [`TravelerRecord::text`].
    pub fn passport(&self) -> Result<&str, ConfigError> {
        self.text(keys::PASSPORT)
    }

    /// Given name.
    ///
    /// # Errors
    ///
    /// See [`TravelerRecord::text`].
    pub fn first_name(&self) -> Result<&str, ConfigError> {
        self.text(keys::FIRST_NAME)
    }

    /// Family name.
    ///
    /// # Errors
    ///
    /// See [`TravelerRecord::text`].
    pub fn last_name(&self) -> Result<&str, ConfigError> {
        self.text(keys::LAST_NAME)
    }

    /// Entry reason; an absent or non-string field parses as `Other("")`.
    #[must_use]
    pub fn entry_reason(&self) -> EntryReason {
        self.fields
            .get(keys::ENTRY_REASON)
            .and_then(FieldValue::as_text)
            .map_or_else(|| EntryReason::Other(String::new()), EntryReason::parse)
    }

    /// An optional location object.
    ///
    /// # Errors
    ///
    /// `InvalidField` if the key holds something other than an object of
    /// strings.
    pub fn location(&self, key: &'static str) -> Result<Option<Location<'_>>, ConfigError> {
        match self.fields.get(key) {
            None => Ok(None),
            Some(v) if v.is_null() => Ok(None),
            Some(FieldValue::Map(fields)) => Ok(Some(Location { key, fields })),
            Some(_) => Err(ConfigError::invalid(key, "expected an object of strings")),
        }
    }

    /// Home location (required).
    ///
    /// # Errors
    ///
    /// `MissingField` if absent, `InvalidField` if malformed.
    pub fn home(&self) -> Result<Location<'_>, ConfigError> {
        self.location(keys::HOME)?
            .ok_or_else(|| ConfigError::missing(keys::HOME))
    }

    /// Origin location (required).
    ///
    /// # Errors
    ///
    /// `MissingField` if absent, `InvalidField` if malformed.
    pub fn from(&self) -> Result<Location<'_>, ConfigError> {
        self.location(keys::FROM)?
            .ok_or_else(|| ConfigError::missing(keys::FROM))
    }

    /// Transit location, absent when traveling directly.
    ///
    /// # Errors
    ///
    /// `InvalidField` if present but malformed.
    pub fn via(&self) -> Result<Option<Location<'_>>, ConfigError> {
        self.location(keys::VIA)
    }

    /// The visa, if the record carries one.
    #[must_use]
    pub fn visa(&self) -> Option<Visa<'_>> {
        let value = self.fields.get(keys::VISA)?;
        if value.is_null() {
            return None;
        }
        let Some(fields) = value.as_map() else {
            return Some(Visa::default());
        };
        Some(Visa {
            code: fields.get(keys::CODE).map(String::as_str),
            date: fields.get(keys::DATE).map(String::as_str),
        })
    }
}

/// Builder for [`TravelerRecord`].
#[derive(Debug, Default)]
pub struct TravelerRecordBuilder {
    record: TravelerRecord,
}

impl TravelerRecordBuilder {
    /// Sets the passport number.
    #[must_use]
    pub fn passport(self, passport: impl Into<String>) -> Self {
        self.field(keys::PASSPORT, passport.into())
    }

    /// Sets first and last name.
    #[must_use]
    pub fn name(self, first: impl Into<String>, last: impl Into<String>) -> Self {
        self.field(keys::FIRST_NAME, first.into())
            .field(keys::LAST_NAME, last.into())
    }

    /// Sets the entry reason.
    #[must_use]
    pub fn entry_reason(self, reason: impl Into<String>) -> Self {
        self.field(keys::ENTRY_REASON, reason.into())
    }

    /// Sets the home country.
    #[must_use]
    pub fn home(self, country: impl Into<String>) -> Self {
        self.location(keys::HOME, country)
    }

    /// Sets the origin country.
    #[must_use]
    pub fn from(self, country: impl Into<String>) -> Self {
        self.location(keys::FROM, country)
    }

    /// Sets the transit country.
    #[must_use]
    pub fn via(self, country: impl Into<String>) -> Self {
        self.location(keys::VIA, country)
    }

    /// Attaches a visa.
    #[must_use]
    pub fn visa(self, code: impl Into<String>, date: impl Into<String>) -> Self {
        let fields = BTreeMap::from([
            (keys::CODE.to_string(), code.into()),
            (keys::DATE.to_string(), date.into()),
        ]);
        self.field(keys::VISA, FieldValue::Map(fields))
    }

    /// Sets a location object holding only a country code.
    #[must_use]
    pub fn location(self, key: &str, country: impl Into<String>) -> Self {
        let fields = BTreeMap::from([(keys::COUNTRY.to_string(), country.into())]);
        self.field(key, FieldValue::Map(fields))
    }

    /// Sets an arbitrary field.
    #[must_use]
    pub fn field(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.record.insert(key, value);
        self
    }

    /// Finishes the record.
    #[must_use]
    pub fn build(self) -> TravelerRecord {
        self.record
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn deserializes_mixed_fields() {
        let record: TravelerRecord = serde_json::from_value(json!({
            "passport": "6P294-42HR2-95PSF-93NFF-2T1D2",
            "first_name": "ELIZABETH",
            "last_name": "WOODS",
            "birth_date": "1974-02-13",
            "home": {"city": "Whitehorse", "region": "Yukon", "country": "KAN"},
            "entry_reason": "returning",
            "from": {"city": "Dublin", "region": "N/A", "country": "IRL"},
            "via": null,
            "age": 40
        }))
        .unwrap();

        assert_eq!(record.passport().unwrap(), "6P294-42HR2-95PSF-93NFF-2T1D2");
        assert_eq!(record.home().unwrap().country().unwrap(), "KAN");
        assert_eq!(record.from().unwrap().country().unwrap(), "IRL");
        assert!(record.via().unwrap().is_none());
        assert!(record.visa().is_none());
        assert_eq!(record.entry_reason(), EntryReason::Returning);
        assert!(matches!(record.get("age"), Some(FieldValue::Other(_))));
    }

    #[test]
    fn missing_required_fields_are_errors() {
        let record = TravelerRecord::builder().name("A", "B").build();
        assert!(matches!(
            record.passport(),
            Err(ConfigError::MissingField { ref field }) if field == "passport"
        ));
        assert!(matches!(
            record.home(),
            Err(ConfigError::MissingField { ref field }) if field == "home"
        ));
    }

    #[test]
    fn location_without_country() {
        let record = TravelerRecord::builder()
            .field("home", FieldValue::Map(BTreeMap::from([("city".to_string(), "Ottawa".to_string())])))
            .build();
        let err = record.home().unwrap().country().unwrap_err();
        assert_eq!(format!("{err}"), "Required field 'home.country' is missing");
    }

    #[test]
    fn home_must_be_an_object() {
        let record = TravelerRecord::builder().field("home", "KAN").build();
        assert!(matches!(record.home(), Err(ConfigError::InvalidField { .. })));
    }

    #[test]
    fn empty_location_value_detected() {
        let record = TravelerRecord::builder().home("").build();
        assert!(record.home().unwrap().has_empty_value());
    }

    #[test]
    fn visa_views() {
        let record = TravelerRecord::builder().visa("CFR6X-XSMVA", "2014-09-01").build();
        let visa = record.visa().unwrap();
        assert_eq!(visa.code, Some("CFR6X-XSMVA"));
        assert_eq!(visa.date, Some("2014-09-01"));

        let record = TravelerRecord::builder().field("visa", "yes").build();
        let visa = record.visa().unwrap();
        assert!(visa.code.is_none());
        assert!(visa.date.is_none());
    }

    #[test]
    fn entry_reason_parsing() {
        assert_eq!(EntryReason::parse("visit"), EntryReason::Visit);
        assert_eq!(EntryReason::parse("transit"), EntryReason::Transit);
        assert_eq!(EntryReason::parse("Visit"), EntryReason::Other("Visit".to_string()));
        assert_eq!(TravelerRecord::new().entry_reason(), EntryReason::Other(String::new()));
        assert_eq!(EntryReason::Transit.to_string(), "transit");
    }
}
