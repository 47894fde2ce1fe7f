//! Batch runs over a directory of archives.
//!
//! Archives are processed sequentially; each archive path is only ever
//! touched by one in-flight scan at a time.

use std::path::Path;
use std::path::PathBuf;

use serde::Serialize;
use walkdir::WalkDir;

use crate::Result;
use crate::VetError;
use crate::check::CheckResult;
use crate::check::check_archive;
use crate::list::ExtensionUsage;
use crate::list::list_extensions;
use crate::policy::Policy;

/// Extension usage of one archive in a batch listing.
#[derive(Debug, Clone, Serialize)]
pub struct DirListing {
    /// The archive that was listed.
    pub archive: PathBuf,
    /// Per-extension usage, first-appearance order.
    pub extensions: Vec<ExtensionUsage>,
}

/// Collects the zip archives directly inside `dir`, name-sorted.
///
/// # Errors
///
/// Returns `DirectoryNotFound` if `dir` does not name an existing
/// directory.
pub fn zips_in_dir<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(VetError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut zips = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(std::io::Error::from)?;
        let is_zip = entry.file_type().is_file()
            && entry
                .path()
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case("zip"));
        if is_zip {
            zips.push(entry.into_path());
        }
    }
    Ok(zips)
}

/// Scans every zip archive directly inside `dir`.
///
/// # Errors
///
/// Returns `DirectoryNotFound` for a missing directory and propagates
/// the first per-archive scan error.
pub fn check_dir<P: AsRef<Path>>(dir: P, policy: &Policy) -> Result<Vec<CheckResult>> {
    zips_in_dir(dir)?
        .iter()
        .map(|archive| check_archive(archive, policy))
        .collect()
}

/// Lists extension usage for every zip archive directly inside `dir`.
///
/// # Errors
///
/// Returns `DirectoryNotFound` for a missing directory and propagates
/// the first per-archive listing error.
pub fn list_dir<P: AsRef<Path>>(dir: P, policy: &Policy) -> Result<Vec<DirListing>> {
    zips_in_dir(dir)?
        .into_iter()
        .map(|archive| {
            let extensions = list_extensions(&archive, policy)?;
            Ok(DirListing {
                archive,
                extensions,
            })
        })
        .collect()
}
