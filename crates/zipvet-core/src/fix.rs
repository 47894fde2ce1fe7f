//! Backup & rewrite engine.
//!
//! `fix` runs the scanner, and when anything is rejected it backs up the
//! original archive, rebuilds it in a staging file without the rejected
//! entries, and atomically replaces the original. The original is never
//! edited in place: a failed rewrite leaves it untouched, with the
//! already-created backup as the recovery path.

use std::path::Path;
use std::path::PathBuf;

use serde::Serialize;
use tempfile::NamedTempFile;

use crate::Result;
use crate::VetError;
use crate::backup::create_backup;
use crate::check::CheckResult;
use crate::check::RejectedFile;
use crate::check::RejectedFolder;
use crate::check::check_archive;
use crate::container;
use crate::container::ArchiveContainer;
use crate::container::StagedEntry;
use crate::container::ZipContainer;
use crate::policy::Policy;

/// Outcome of one rewrite. The removal lists are the pre-rewrite
/// rejection set the rewrite targeted. Created once per fix call.
#[derive(Debug, Clone, Serialize)]
pub struct FixResult {
    /// Files removed from the archive.
    pub removed_files: Vec<RejectedFile>,
    /// Folders (with their subtrees) removed from the archive.
    pub removed_folders: Vec<RejectedFolder>,
    /// Path of the backup copy; `None` for a no-op fix or when the
    /// caller declined the backup.
    pub backup_file: Option<PathBuf>,
}

impl FixResult {
    /// Returns `true` when the archive needed no changes.
    #[must_use]
    pub fn nothing_removed(&self) -> bool {
        self.removed_files.is_empty() && self.removed_folders.is_empty()
    }
}

/// Removes every policy-rejected entry from the archive.
///
/// Sequencing: scan, then (when anything is rejected and `make_backup`
/// is set) back up the original and verify the backup on disk, then
/// rebuild the archive without the rejected entries and atomically
/// replace the original. A scan with nothing rejected is a successful
/// no-op and takes no backup.
///
/// Callers must not invoke this concurrently for the same archive path;
/// no internal locking is provided.
///
/// # Errors
///
/// Propagates scan errors unchanged; returns `BackupFailed` when no
/// backup could be created or verified, and `RewriteFailed` when the
/// replacement archive could not be built or moved into place.
///
/// # Examples
///
/// ```no_run
/// use zipvet_core::Policy;
/// use zipvet_core::fix_archive;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let policy = Policy::builtin()?;
/// let fixed = fix_archive("extension.zip", &policy, true)?;
/// if let Some(backup) = &fixed.backup_file {
///     println!("original backed up to {}", backup.display());
/// }
/// # Ok(())
/// # }
/// ```
pub fn fix_archive<P: AsRef<Path>>(
    archive_path: P,
    policy: &Policy,
    make_backup: bool,
) -> Result<FixResult> {
    let archive_path = archive_path.as_ref();

    let check = check_archive(archive_path, policy)?;
    if check.is_clean() {
        return Ok(FixResult {
            removed_files: Vec::new(),
            removed_folders: Vec::new(),
            backup_file: None,
        });
    }

    let backup_file = if make_backup {
        let backup = create_backup(archive_path)?;
        // The rewrite must never run without a verified backup.
        if !backup.is_file() {
            return Err(VetError::BackupFailed {
                reason: format!("backup {} missing after copy", backup.display()),
            });
        }
        Some(backup)
    } else {
        None
    };

    rewrite_without(archive_path, &check)?;

    Ok(FixResult {
        removed_files: check.rejected_files,
        removed_folders: check.rejected_folders,
        backup_file,
    })
}

/// Rebuilds the archive without the rejected entries and replaces the
/// original with a write-then-rename.
fn rewrite_without(archive_path: &Path, check: &CheckResult) -> Result<()> {
    let mut source = ZipContainer::open(archive_path)?;

    let mut kept = Vec::new();
    for record in source.entries()? {
        if is_targeted(&record.path, check) {
            continue;
        }
        let data = if record.is_dir {
            Vec::new()
        } else {
            source.read_entry(&record.path)?
        };
        kept.push(StagedEntry {
            path: record.path,
            is_dir: record.is_dir,
            unix_mode: record.unix_mode,
            data,
        });
    }

    // Stage in the archive's own directory so the final rename stays on
    // one filesystem; the staging file is removed on drop if anything
    // below fails.
    let dir = archive_path.parent().unwrap_or_else(|| Path::new("."));
    let mut staged = NamedTempFile::new_in(dir).map_err(|e| VetError::RewriteFailed {
        reason: format!("cannot stage replacement archive: {e}"),
    })?;
    container::write_zip(staged.as_file_mut(), &kept)?;

    // Release the source handle before replacing the file under it.
    drop(source);

    staged
        .persist(archive_path)
        .map_err(|e| VetError::RewriteFailed {
            reason: format!("cannot replace {}: {e}", archive_path.display()),
        })?;
    Ok(())
}

/// Whether the entry at `path` was targeted for removal by the scan.
fn is_targeted(path: &str, check: &CheckResult) -> bool {
    if check.rejected_files.iter().any(|f| f.entry_path == path) {
        return true;
    }
    check
        .rejected_folders
        .iter()
        .any(|folder| is_under(path, &folder.entry_path))
}

/// Whether `path` equals the folder entry or lies inside its subtree.
fn is_under(path: &str, folder_entry: &str) -> bool {
    if path == folder_entry {
        return true;
    }
    if folder_entry.ends_with('/') {
        path.starts_with(folder_entry)
    } else {
        path.strip_prefix(folder_entry)
            .is_some_and(|rest| rest.starts_with('/'))
    }
}
