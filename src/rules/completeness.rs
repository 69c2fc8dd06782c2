use crate::error::ConfigError;
use crate::format::is_valid_passport_format;
use crate::record::{FieldValue, TravelerRecord};

/// True if the record is missing information it needs to be accepted.
///
/// Fires on a malformed passport, an empty value inside `home` or `from`,
/// or any top-level text field holding the empty string. Absent optional
/// fields never trip it.
///
/// # Errors
///
/// Returns `ConfigError` when `passport`, `home` or `from` is absent
/// altogether: such a record cannot be evaluated.
pub fn is_record_incomplete(record: &TravelerRecord) -> Result<bool, ConfigError> {
    let passport = record.passport()?;
    let home = record.home()?;
    let from = record.from()?;

    if !is_valid_passport_format(passport) {
        return Ok(true);
    }
    if home.has_empty_value() || from.has_empty_value() {
        return Ok(true);
    }

    Ok(record
        .fields()
        .any(|(_, value)| matches!(value, FieldValue::Text(s) if s.is_empty())))
}
