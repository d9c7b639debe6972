//! The append-only JSON journal of submitted records.
//!
//! Every successful add appends the validated record here. Deletions never
//! touch it — the journal is an additive audit log, not a mirror of the
//! page, so a record deleted from the page stays in the journal.

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use super::{StoreError, StoreResult};

/// Appends `record` to the JSON array at `path`.
///
/// A missing file starts as an empty array; parent directories are created
/// as needed. The file is rewritten pretty-printed with the new record at
/// the end. Existing entries are never deduplicated or removed.
///
/// # Errors
///
/// Returns a [`StoreError`] if the existing file cannot be read, is not a
/// JSON array, or the rewrite fails.
pub fn append(path: &Path, record: Value) -> StoreResult<()> {
    let mut entries: Vec<Value> = if path.exists() {
        let contents = fs::read_to_string(path).map_err(|e| StoreError::JournalRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&contents).map_err(|e| StoreError::JournalParse {
            path: path.to_path_buf(),
            source: e,
        })?
    } else {
        Vec::new()
    };

    entries.push(record);

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| StoreError::JournalWrite {
            path: path.to_path_buf(),
            source: e,
        })?;
    }

    let contents = serde_json::to_string_pretty(&entries).map_err(|e| {
        StoreError::JournalParse {
            path: path.to_path_buf(),
            source: e,
        }
    })?;
    fs::write(path, contents).map_err(|e| StoreError::JournalWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    debug!(journal = %path.display(), count = entries.len(), "journal appended");
    Ok(())
}
