use crate::country::CountryTable;
use crate::error::ConfigError;
use crate::record::TravelerRecord;

/// True if the traveler arrives from, or transits through, a country with a
/// medical advisory.
///
/// # Errors
///
/// Returns `ConfigError` if `from` (or a present `via`) is malformed or
/// names a country missing from the table.
pub fn is_quarantine_required(
    record: &TravelerRecord,
    countries: &CountryTable,
) -> Result<bool, ConfigError> {
    let from = record.from()?.country()?;
    if countries.policy(from)?.has_advisory() {
        return Ok(true);
    }

    match record.via()? {
        Some(via) => Ok(countries.policy(via.country()?)?.has_advisory()),
        None => Ok(false),
    }
}
