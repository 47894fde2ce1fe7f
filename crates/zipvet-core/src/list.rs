//! Listing conveniences derived from the scanner's classification.

use std::path::Path;

use serde::Serialize;

use crate::Result;
use crate::check::resolve_archive_path;
use crate::container::ArchiveContainer;
use crate::container::ZipContainer;
use crate::extension::extension_of;
use crate::policy::Policy;
use crate::scope;

/// Usage of one file extension inside an archive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtensionUsage {
    /// Canonical extension (policy key form).
    pub extension: String,
    /// Number of in-scope files carrying it.
    pub count: usize,
    /// Whether the policy rejects this extension.
    pub rejected: bool,
}

/// Lists every extension used by in-scope files, with usage counts.
///
/// The list is ordered by first appearance in the archive.
///
/// # Errors
///
/// Returns `FileNotFound`, `NotAnArchive` or `InvalidArchive` like
/// [`crate::check_archive`].
pub fn list_extensions<P: AsRef<Path>>(
    archive_path: P,
    policy: &Policy,
) -> Result<Vec<ExtensionUsage>> {
    let archive_path = archive_path.as_ref();
    resolve_archive_path(archive_path)?;

    let mut container = ZipContainer::open(archive_path)?;
    let mut usage: Vec<ExtensionUsage> = Vec::new();

    for record in container.entries()? {
        if record.is_dir || scope::is_out_of_scope(&record.path, policy) {
            continue;
        }
        let ext = extension_of(&record.path);
        if let Some(existing) = usage.iter_mut().find(|u| u.extension == ext.policy_key()) {
            existing.count += 1;
        } else {
            usage.push(ExtensionUsage {
                extension: ext.policy_key().to_string(),
                rejected: !policy.is_accepted(&ext),
                count: 1,
            });
        }
    }

    Ok(usage)
}

/// Lists the paths of in-scope file entries, optionally restricted to
/// one extension.
///
/// The filter is matched against the canonical classifier output:
/// case-insensitive, with an optional leading dot (`html` and `.html`
/// select the same entries).
///
/// # Errors
///
/// Returns `FileNotFound`, `NotAnArchive` or `InvalidArchive` like
/// [`crate::check_archive`].
pub fn list_entries<P: AsRef<Path>>(
    archive_path: P,
    policy: &Policy,
    extension: Option<&str>,
) -> Result<Vec<String>> {
    let archive_path = archive_path.as_ref();
    resolve_archive_path(archive_path)?;

    let filter = extension.map(|e| e.trim_start_matches('.').to_ascii_lowercase());

    let mut container = ZipContainer::open(archive_path)?;
    let mut matching = Vec::new();

    for record in container.entries()? {
        if record.is_dir || scope::is_out_of_scope(&record.path, policy) {
            continue;
        }
        if let Some(wanted) = &filter {
            if extension_of(&record.path).policy_key() != wanted {
                continue;
            }
        }
        matching.push(record.path);
    }

    Ok(matching)
}
