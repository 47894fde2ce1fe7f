//! Sibling-file backups with bounded name probing.

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use crate::Result;
use crate::VetError;

/// Upper bound on backup-name probes.
const MAX_BACKUP_PROBES: u32 = 100;

/// Copies the archive to a sibling `"{stem}_{i}.bak.zip"`, probing
/// suffixes from 1 until an unused name is found.
///
/// The `.zip` suffix is kept so the backup itself remains scannable.
///
/// # Errors
///
/// Returns `BackupFailed` when the copy fails or every candidate name
/// within the probe bound is taken.
pub fn create_backup(archive_path: &Path) -> Result<PathBuf> {
    let dir = archive_path.parent().unwrap_or_else(|| Path::new("."));
    let stem = archive_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("archive");

    for attempt in 1..=MAX_BACKUP_PROBES {
        let candidate = dir.join(format!("{stem}_{attempt}.bak.zip"));
        if candidate.exists() {
            continue;
        }
        fs::copy(archive_path, &candidate).map_err(|e| VetError::BackupFailed {
            reason: format!("copy to {} failed: {e}", candidate.display()),
        })?;
        return Ok(candidate);
    }

    Err(VetError::BackupFailed {
        reason: format!("no unused backup name within {MAX_BACKUP_PROBES} attempts"),
    })
}
