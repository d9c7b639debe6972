//! Persistence: backup-then-replace page writes and the JSON journal.
//!
//! [`commit`] is the only way this crate writes the page: the current bytes
//! are copied to a timestamped file in a sibling `backups/` directory and
//! only then is the page overwritten. Any failure aborts with the page
//! untouched. [`journal`] appends submitted records to an append-only JSON
//! audit log.

pub mod commit;
pub mod journal;

pub use commit::{commit, CommitReceipt};
pub use journal::append as journal_append;

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during backup, write, or journal operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The page to be updated could not be read.
    #[error("failed to read page: {path}")]
    Read {
        /// Path to the page.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The sibling `backups/` directory could not be created.
    #[error("failed to create backup directory: {path}")]
    BackupDir {
        /// Path of the directory.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The backup copy could not be written.
    #[error("failed to write backup: {path}")]
    BackupWrite {
        /// Path of the backup file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The page itself could not be overwritten. The backup taken just
    /// before may be left behind; that is accepted garbage, not corruption.
    #[error("failed to write page: {path}")]
    Write {
        /// Path to the page.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The journal file could not be read.
    #[error("failed to read journal: {path}")]
    JournalRead {
        /// Path to the journal file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The journal file exists but is not a JSON array.
    #[error("invalid JSON in journal: {path}")]
    JournalParse {
        /// Path to the journal file.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The journal file could not be written.
    #[error("failed to write journal: {path}")]
    JournalWrite {
        /// Path to the journal file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl StoreError {
    /// Creates a page read error.
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Creates a page write error.
    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}
