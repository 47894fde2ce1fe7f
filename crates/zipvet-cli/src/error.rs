//! Error conversion utilities for CLI.
//!
//! Converts zipvet-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::Result;
use anyhow::anyhow;
use std::path::Path;
use zipvet_core::VetError;

/// Converts `VetError` to a user-friendly anyhow error with context
pub fn convert_vet_error(err: VetError, target: &Path) -> anyhow::Error {
    match err {
        VetError::FileNotFound { path } => {
            anyhow!(
                "Archive not found: {}\n\
                 HINT: Check the path; relative paths are resolved against the current directory.",
                path.display()
            )
        }
        VetError::NotAnArchive { path } => {
            anyhow!(
                "Not a zip archive: {}\n\
                 HINT: Only .zip packages are supported.",
                path.display()
            )
        }
        VetError::DirectoryNotFound { path } => {
            anyhow!(
                "Directory not found: {}\n\
                 HINT: Batch mode expects an existing directory containing .zip files.",
                path.display()
            )
        }
        VetError::InvalidArchive(reason) => {
            anyhow!(
                "Invalid archive '{}': {reason}\n\
                 HINT: The archive may be corrupted or truncated.",
                target.display()
            )
        }
        VetError::InvalidPolicy(reason) => {
            anyhow!(
                "Invalid policy: {reason}\n\
                 HINT: The policy must be a JSON document with the arrays 'accepted', 'rejected', \
                 'safeToRemoveFileExtensions' and 'safeToRemoveFolders'."
            )
        }
        VetError::BackupFailed { reason } => {
            anyhow!(
                "Could not back up '{}': {reason}\n\
                 HINT: The archive was not modified. Remove stale *.bak.zip files or free up disk \
                 space, then retry.",
                target.display()
            )
        }
        VetError::RewriteFailed { reason } => {
            anyhow!(
                "Could not rewrite '{}': {reason}\n\
                 HINT: The original archive is untouched; the backup copy (if any) remains next to it.",
                target.display()
            )
        }
        VetError::Io(io_err) => {
            anyhow!("I/O error while processing '{}': {io_err}", target.display())
        }
    }
}

/// Adds context to a core result about the archive or directory it ran on
pub fn add_target_context<T>(result: Result<T, VetError>, target: &Path) -> Result<T> {
    result.map_err(|e| convert_vet_error(e, target))
}
