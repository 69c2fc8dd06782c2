//! JSON file loading.
//!
//! This is the only part of the crate that touches the filesystem. A missing
//! file is reported as [`LoadError::FileNotFound`], separately from other
//! read failures and from malformed JSON.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::country::CountryTable;
use crate::decision::Decision;
use crate::engine::{decide, EngineConfig};
use crate::error::{LoadError, PapersResult};
use crate::record::TravelerRecord;
use crate::watchlist::Watchlist;

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let raw = fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => LoadError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;
    let value = serde_json::from_str(&raw).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = raw.len(), "loaded");
    Ok(value)
}

/// Loads a JSON array of traveler records.
///
/// # Errors
///
/// Returns `LoadError` if the file is missing, unreadable or malformed.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<TravelerRecord>, LoadError> {
    read_json(path.as_ref())
}

/// Loads a JSON array of watchlist entries.
///
/// # Errors
///
/// Returns `LoadError` if the file is missing, unreadable or malformed.
pub fn load_watchlist(path: impl AsRef<Path>) -> Result<Watchlist, LoadError> {
    read_json(path.as_ref())
}

/// Loads a JSON object mapping country codes to policies.
///
/// # Errors
///
/// Returns `LoadError` if the file is missing, unreadable or malformed.
pub fn load_countries(path: impl AsRef<Path>) -> Result<CountryTable, LoadError> {
    read_json(path.as_ref())
}

/// Loads an engine configuration. Omitted keys take their defaults.
///
/// # Errors
///
/// Returns `LoadError` if the file is missing, unreadable or malformed.
pub fn load_config(path: impl AsRef<Path>) -> Result<EngineConfig, LoadError> {
    read_json(path.as_ref())
}

/// Loads the three input files and decides every record with the default
/// configuration.
///
/// All three files are loaded before any record is evaluated.
///
/// # Errors
///
/// Returns `PapersError::Load` for file problems and `PapersError::Record`
/// for a record that cannot be evaluated.
pub fn decide_files(
    input: impl AsRef<Path>,
    watchlist: impl AsRef<Path>,
    countries: impl AsRef<Path>,
) -> PapersResult<Vec<Decision>> {
    let records = load_records(input)?;
    let watchlist = load_watchlist(watchlist)?;
    let countries = load_countries(countries)?;
    decide(&records, &watchlist, &countries)
}
