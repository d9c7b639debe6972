//! Error types for record loading and validation.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for record operations.
pub type RecordResult<T> = Result<T, RecordError>;

/// Errors that can occur while loading or validating a record.
#[derive(Debug, Error)]
pub enum RecordError {
    /// One or more required fields are absent.
    ///
    /// Validation checks every required field before failing, so `fields`
    /// lists all of them at once rather than the first one found.
    #[error("missing required {kind} field(s): {}", .fields.join(", "))]
    MissingFields {
        /// Record kind ("tool" or "template").
        kind: &'static str,
        /// Names of every absent required field.
        fields: Vec<String>,
    },

    /// The record JSON file does not exist.
    #[error("record file not found: {path}")]
    FileNotFound {
        /// Path that was probed.
        path: PathBuf,
    },

    /// The record JSON file exists but could not be read.
    #[error("failed to read record file: {path}")]
    Read {
        /// Path to the record file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The record file is not syntactically valid JSON, or does not match
    /// the expected shape.
    #[error("invalid JSON in record file: {path}")]
    InvalidJson {
        /// Path to the record file.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

impl RecordError {
    /// Creates a missing-fields error.
    pub fn missing_fields(kind: &'static str, fields: Vec<String>) -> Self {
        Self::MissingFields { kind, fields }
    }

    /// Creates a file read error.
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Creates an invalid JSON error.
    pub fn invalid_json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::InvalidJson {
            path: path.into(),
            source,
        }
    }
}
