//! Pre-write backups
//!
//! A backup is a verbatim copy of the device at `<path>.backup`. It is made
//! once and never overwritten, so it always holds the pristine original.

use crate::errors::{io_error, Result};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Suffix appended to a device path to name its backup
pub const BACKUP_SUFFIX: &str = ".backup";

/// `<path>.backup`
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(BACKUP_SUFFIX);
    PathBuf::from(name)
}

/// Copy `path` to its backup location unless a backup already exists
///
/// Returns the backup path when one was created, `None` when an existing
/// backup was kept.
pub fn ensure_backup(path: &Path) -> Result<Option<PathBuf>> {
    let backup = backup_path(path);
    if backup.exists() {
        tracing::debug!(backup = %backup.display(), "backup already exists, keeping it");
        return Ok(None);
    }

    fs::copy(path, &backup).map_err(|e| io_error("create_backup", path, e))?;
    tracing::info!(backup = %backup.display(), "backup created");
    Ok(Some(backup))
}
