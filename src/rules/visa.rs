use chrono::{DateTime, Utc};

use crate::country::CountryTable;
use crate::error::ConfigError;
use crate::format::{is_valid_visa_code_format, is_visa_current_at, try_parse_date};
use crate::record::{EntryReason, TravelerRecord, Visa};

/// True if the traveler needs a visa and does not hold a valid one.
///
/// Only visitors and travelers in transit are checked, against the
/// requirement flags of their home country. A missing visa, a malformed
/// code, a malformed date and an expired visa are all equally invalid.
///
/// # Errors
///
/// Returns `ConfigError` if a checked record has a malformed `home` or a
/// home country missing from the table.
pub fn is_visa_invalid(
    record: &TravelerRecord,
    countries: &CountryTable,
    now: DateTime<Utc>,
) -> Result<bool, ConfigError> {
    let reason = record.entry_reason();
    if !matches!(reason, EntryReason::Visit | EntryReason::Transit) {
        return Ok(false);
    }

    let home = record.home()?.country()?;
    let policy = countries.policy(home)?;
    let required = match reason {
        EntryReason::Visit => policy.visitor_visa_required,
        EntryReason::Transit => policy.transit_visa_required,
        _ => false,
    };
    if !required {
        return Ok(false);
    }

    Ok(!record.visa().is_some_and(|visa| holds_valid_visa(visa, now)))
}

fn holds_valid_visa(visa: Visa<'_>, now: DateTime<Utc>) -> bool {
    let code_ok = visa.code.is_some_and(is_valid_visa_code_format);
    code_ok
        && visa
            .date
            .and_then(try_parse_date)
            .is_some_and(|issued| is_visa_current_at(issued, now))
}
