//! Backup-then-replace page writes.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::debug;

use super::{StoreError, StoreResult};

/// What a successful commit did, for operator display.
#[derive(Debug)]
pub struct CommitReceipt {
    /// Where the pre-write backup landed.
    pub backup_path: PathBuf,
}

/// Overwrites `path` with `new_content`, backing up the current bytes first.
///
/// The backup goes to `<dir>/backups/<stem>_backup_YYYYMMDD_HHMMSS.html`
/// beside the page. Timestamps have second resolution; two commits of the
/// same page within one second can collide on the backup name, which is an
/// accepted limitation of the naming scheme, not guarded against.
///
/// Steps are strictly ordered — read, create backup dir, write backup,
/// write page — and any failure aborts with `path` untouched. A backup
/// orphaned by a failing final write is left behind deliberately.
///
/// # Errors
///
/// Returns a [`StoreError`] naming the failing step and path.
pub fn commit(path: &Path, new_content: &str) -> StoreResult<CommitReceipt> {
    let original = fs::read(path).map_err(|e| StoreError::read(path, e))?;

    let parent = path.parent().filter(|p| !p.as_os_str().is_empty());
    let backup_dir = parent.unwrap_or_else(|| Path::new(".")).join("backups");
    fs::create_dir_all(&backup_dir).map_err(|e| StoreError::BackupDir {
        path: backup_dir.clone(),
        source: e,
    })?;

    let stem = path
        .file_stem()
        .map_or_else(|| "index".to_string(), |s| s.to_string_lossy().into_owned());
    let stamp = Local::now().format("%Y%m%d_%H%M%S");
    let backup_path = backup_dir.join(format!("{stem}_backup_{stamp}.html"));

    fs::write(&backup_path, &original).map_err(|e| StoreError::BackupWrite {
        path: backup_path.clone(),
        source: e,
    })?;
    debug!(backup = %backup_path.display(), "wrote pre-commit backup");

    fs::write(path, new_content).map_err(|e| StoreError::write(path, e))?;

    Ok(CommitReceipt { backup_path })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commit_backs_up_then_replaces() {
        let dir = tempfile::tempdir().unwrap();
        let page = dir.path().join("index.html");
        fs::write(&page, "old content").unwrap();

        let receipt = commit(&page, "new content").unwrap();

        assert_eq!(fs::read_to_string(&page).unwrap(), "new content");
        assert_eq!(
            fs::read_to_string(&receipt.backup_path).unwrap(),
            "old content"
        );
        let name = receipt
            .backup_path
            .file_name()
            .unwrap()
            .to_string_lossy()
            .into_owned();
        assert!(name.starts_with("index_backup_"));
        assert!(name.ends_with(".html"));
        assert_eq!(receipt.backup_path.parent().unwrap(), dir.path().join("backups"));
    }

    #[test]
    fn commit_missing_page_fails_before_any_write() {
        let dir = tempfile::tempdir().unwrap();
        let page = dir.path().join("index.html");

        let err = commit(&page, "new content").unwrap_err();
        assert!(matches!(err, StoreError::Read { .. }));
        assert!(!page.exists());
        assert!(!dir.path().join("backups").exists());
    }

    #[test]
    fn failed_backup_dir_leaves_page_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let page = dir.path().join("index.html");
        fs::write(&page, "old content").unwrap();
        // A plain file where the backup directory should go.
        fs::write(dir.path().join("backups"), "not a directory").unwrap();

        let err = commit(&page, "new content").unwrap_err();
        assert!(matches!(err, StoreError::BackupDir { .. }));
        assert_eq!(fs::read_to_string(&page).unwrap(), "old content");
    }
}
