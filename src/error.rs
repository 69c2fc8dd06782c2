//! Error types for papers.
//!
//! All errors are strongly typed using thiserror. Policy outcomes
//! (a malformed passport, an expired visa, a watchlist hit) are never
//! errors: they resolve to a [`Decision`](crate::Decision). The types here
//! cover the two fatal classes only: broken reference data or records the
//! engine cannot evaluate at all, and failures of the file loader.

use std::path::PathBuf;

use thiserror::Error;

/// Configuration/data errors that make a batch impossible to evaluate.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Country code '{code}' is not present in the country table")]
    UnknownCountry {
        code: String,
    },

    #[error("Required field '{field}' is missing")]
    MissingField {
        field: String,
    },

    #[error("Field '{field}' is malformed: {reason}")]
    InvalidField {
        field: String,
        reason: String,
    },
}

impl ConfigError {
    /// Creates a missing-field error.
    #[must_use]
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Creates a malformed-field error.
    #[must_use]
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Errors raised while reading reference data or records from disk.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("File not found: {}", path.display())]
    FileNotFound {
        path: PathBuf,
    },

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Top-level error type for papers.
#[derive(Debug, Error)]
pub enum PapersError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    #[error("Record {index}: {source}")]
    Record {
        index: usize,
        #[source]
        source: ConfigError,
    },
}

impl PapersError {
    /// Wraps a configuration error with the index of the offending record.
    #[must_use]
    pub const fn at_record(index: usize, source: ConfigError) -> Self {
        Self::Record { index, source }
    }

    /// Returns true if this is a configuration/data error, with or without
    /// a record index attached.
    #[must_use]
    pub const fn is_config(&self) -> bool {
        matches!(self, Self::Config(_) | Self::Record { .. })
    }

    /// Returns true if this is a loader error.
    #[must_use]
    pub const fn is_load(&self) -> bool {
        matches!(self, Self::Load(_))
    }

    /// Returns true if a reference or input file was missing.
    #[must_use]
    pub const fn is_file_not_found(&self) -> bool {
        matches!(self, Self::Load(LoadError::FileNotFound { .. }))
    }

    /// Index of the record that failed, if any.
    #[must_use]
    pub const fn record_index(&self) -> Option<usize> {
        match self {
            Self::Record { index, .. } => Some(*index),
            _ => None,
        }
    }
}

/// Result type alias for papers operations.
pub type PapersResult<T> = Result<T, PapersError>;
