//! Format validators used by the rule predicates.
//!
//! None of these functions fail: a malformed value is a legitimate
//! per-record outcome and is reported as `false` (or `None`).

use std::sync::OnceLock;

use chrono::{DateTime, NaiveDate, Utc};
use regex::Regex;

/// Seconds in one mean Gregorian year (365.2425 days).
pub const SECONDS_PER_MEAN_YEAR: i64 = 31_556_952;

/// A visa stays current for strictly less than this many mean years.
pub const VISA_VALIDITY_YEARS: i64 = 2;

static PASSPORT_RE: OnceLock<Regex> = OnceLock::new();
static VISA_CODE_RE: OnceLock<Regex> = OnceLock::new();
static DATE_RE: OnceLock<Regex> = OnceLock::new();

fn passport_re() -> &'static Regex {
    PASSPORT_RE.get_or_init(|| {
        Regex::new(r"^\w{5}-\w{5}-\w{5}-\w{5}-\w{5}$").expect("static regex is valid")
    })
}

fn visa_code_re() -> &'static Regex {
    VISA_CODE_RE.get_or_init(|| Regex::new(r"^\w{5}-\w{5}$").expect("static regex is valid"))
}

fn date_re() -> &'static Regex {
    DATE_RE.get_or_init(|| {
        Regex::new(r"^([0-9]{4})-([0-9]{1,2})-([0-9]{1,2})$").expect("static regex is valid")
    })
}

/// Five groups of five word characters separated by single dashes.
///
/// ```
/// use papers::format::is_valid_passport_format;
///
/// assert!(is_valid_passport_format("6P294-42HR2-95PSF-93NFF-2T1D2"));
/// assert!(!is_valid_passport_format("6P294-42HR2-95PSF-93NFF"));
/// ```
#[must_use]
pub fn is_valid_passport_format(passport: &str) -> bool {
    passport_re().is_match(passport)
}

/// Two groups of five word characters separated by a single dash.
#[must_use]
pub fn is_valid_visa_code_format(code: &str) -> bool {
    visa_code_re().is_match(code)
}

/// Parses a `YYYY-MM-DD` date.
///
/// Month and day may be written with one or two digits; the year must have
/// exactly four. Out-of-range months or days yield `None`.
#[must_use]
pub fn try_parse_date(value: &str) -> Option<NaiveDate> {
    let caps = date_re().captures(value)?;
    let year: i32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let day: u32 = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// True iff `value` is a real calendar date in `YYYY-MM-DD` form.
#[must_use]
pub fn is_valid_date_format(value: &str) -> bool {
    try_parse_date(value).is_some()
}

/// True iff fewer than two mean Gregorian years separate `issued` from now.
#[must_use]
pub fn is_visa_current(issued: NaiveDate) -> bool {
    is_visa_current_at(issued, Utc::now())
}

/// Same as [`is_visa_current`] against an explicit evaluation instant.
///
/// The issue date counts from midnight UTC. The comparison is done in whole
/// seconds, so a visa issued exactly two mean years before `now` is expired.
/// Issue dates after `now` are current.
#[must_use]
pub fn is_visa_current_at(issued: NaiveDate, now: DateTime<Utc>) -> bool {
    let issued_at = issued.and_time(chrono::NaiveTime::MIN).and_utc();
    let elapsed = (now - issued_at).num_seconds();
    elapsed < VISA_VALIDITY_YEARS * SECONDS_PER_MEAN_YEAR
}
