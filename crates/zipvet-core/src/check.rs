//! Archive scanning against an extension policy.

use std::path::Path;
use std::path::PathBuf;

use serde::Serialize;

use crate::Result;
use crate::VetError;
use crate::container::ArchiveContainer;
use crate::container::EntryRecord;
use crate::container::ZipContainer;
use crate::extension::extension_of;
use crate::policy::Policy;
use crate::scope;

/// A file entry the policy does not accept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedFile {
    /// Entry file name (final path segment).
    pub name: String,
    /// Full archive-relative entry path.
    pub entry_path: String,
    /// Canonical extension the rejection was decided on.
    pub extension: String,
    /// Whether automated deletion is considered low-risk.
    pub safe_to_remove: bool,
}

/// A directory entry whose whole subtree is flagged for removal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedFolder {
    /// Folder name (final path segment, trailing separator trimmed).
    pub name: String,
    /// Full archive-relative entry path.
    pub entry_path: String,
    /// Whether automated deletion is considered low-risk.
    pub safe_to_remove: bool,
}

/// Outcome of one archive scan. Created fresh per call, immutable once
/// returned, owned by the caller.
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    /// The archive that was scanned.
    pub checked_file: PathBuf,
    /// Number of in-scope file entries.
    pub num_files: usize,
    /// Number of directory entries, scope rules notwithstanding.
    pub num_dirs: usize,
    /// Rejected files, in archive iteration order.
    pub rejected_files: Vec<RejectedFile>,
    /// Rejected folders, in archive iteration order.
    pub rejected_folders: Vec<RejectedFolder>,
}

impl CheckResult {
    /// Returns `true` when nothing was rejected.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.rejected_files.is_empty() && self.rejected_folders.is_empty()
    }
}

/// Validates that `path` names an existing file with the recognized
/// container extension.
pub(crate) fn resolve_archive_path(path: &Path) -> Result<()> {
    if !path.is_file() {
        return Err(VetError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let is_zip = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("zip"));
    if !is_zip {
        return Err(VetError::NotAnArchive {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// Scans an archive and reports every entry the policy rejects.
///
/// Directory entries are always counted; files excluded by folder-scope
/// rules are invisible (neither counted nor evaluated). Rejection lists
/// preserve the archive's native iteration order.
///
/// # Errors
///
/// Returns `FileNotFound` if the path does not resolve to an existing
/// file, `NotAnArchive` if it is not a `.zip` file, or `InvalidArchive`
/// if the container cannot be parsed.
///
/// # Examples
///
/// ```no_run
/// use zipvet_core::Policy;
/// use zipvet_core::check_archive;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let policy = Policy::builtin()?;
/// let result = check_archive("extension.zip", &policy)?;
/// println!(
///     "{} files in {} directories, {} rejected",
///     result.num_files,
///     result.num_dirs,
///     result.rejected_files.len()
/// );
/// # Ok(())
/// # }
/// ```
pub fn check_archive<P: AsRef<Path>>(archive_path: P, policy: &Policy) -> Result<CheckResult> {
    let archive_path = archive_path.as_ref();
    resolve_archive_path(archive_path)?;

    let mut container = ZipContainer::open(archive_path)?;
    let records = container.entries()?;
    Ok(scan_entries(archive_path, &records, policy))
}

/// Applies the policy to an already-enumerated entry set.
pub(crate) fn scan_entries(
    checked_file: &Path,
    records: &[EntryRecord],
    policy: &Policy,
) -> CheckResult {
    let mut result = CheckResult {
        checked_file: checked_file.to_path_buf(),
        num_files: 0,
        num_dirs: 0,
        rejected_files: Vec::new(),
        rejected_folders: Vec::new(),
    };

    for record in records {
        if record.is_dir {
            // Directories are counted even when scope rules would hide
            // their contents: the archive truly contains that many.
            result.num_dirs += 1;
            let name = entry_name(&record.path);
            if policy.is_safe_to_remove_folder(name) {
                result.rejected_folders.push(RejectedFolder {
                    name: name.to_string(),
                    entry_path: record.path.clone(),
                    safe_to_remove: true,
                });
            }
        } else {
            if scope::is_out_of_scope(&record.path, policy) {
                continue;
            }
            result.num_files += 1;
            let ext = extension_of(&record.path);
            if !policy.is_accepted(&ext) {
                let safe_to_remove = policy.is_safe_to_remove_extension(&ext);
                result.rejected_files.push(RejectedFile {
                    name: entry_name(&record.path).to_string(),
                    entry_path: record.path.clone(),
                    extension: ext.policy_key().to_string(),
                    safe_to_remove,
                });
            }
        }
    }

    result
}

/// Final path segment with any trailing separator trimmed.
pub(crate) fn entry_name(path: &str) -> &str {
    path.trim_end_matches(['/', '\\'])
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(path: &str, is_dir: bool) -> EntryRecord {
        EntryRecord {
            path: path.to_string(),
            is_dir,
            unix_mode: None,
        }
    }

    fn test_policy() -> Policy {
        Policy::new(
            ["qext", "js", "json", "html"],
            ["md"],
            ["md", "gitignore"],
            [".build", ".idea"],
        )
    }

    #[test]
    fn test_entry_name_trims_trailing_separator() {
        assert_eq!(entry_name(".build/"), ".build");
        assert_eq!(entry_name("sub/.build/"), ".build");
        assert_eq!(entry_name("sub/file.js"), "file.js");
    }

    #[test]
    fn test_dirs_counted_regardless_of_scope() {
        let records = vec![
            record(".build/", true),
            record(".build/nested/", true),
            record("src/", true),
        ];
        let result = scan_entries(Path::new("x.zip"), &records, &test_policy());
        assert_eq!(result.num_dirs, 3);
        assert_eq!(result.num_files, 0);
    }

    #[test]
    fn test_safe_folder_dirs_are_rejected() {
        let records = vec![record(".build/", true), record("src/", true)];
        let result = scan_entries(Path::new("x.zip"), &records, &test_policy());
        assert_eq!(result.rejected_folders.len(), 1);
        assert_eq!(result.rejected_folders[0].name, ".build");
        assert_eq!(result.rejected_folders[0].entry_path, ".build/");
        assert!(result.rejected_folders[0].safe_to_remove);
    }

    #[test]
    fn test_out_of_scope_files_are_invisible() {
        let records = vec![
            record(".build/generated.js", false),
            record("deep/.idea/settings.xml", false),
            record("src/app.js", false),
        ];
        let result = scan_entries(Path::new("x.zip"), &records, &test_policy());
        assert_eq!(result.num_files, 1);
        assert!(result.rejected_files.is_empty());
    }

    #[test]
    fn test_rejections_keep_iteration_order() {
        let records = vec![
            record("b.md", false),
            record("a.md", false),
            record("ok.js", false),
            record("c.yaml", false),
        ];
        let result = scan_entries(Path::new("x.zip"), &records, &test_policy());
        let paths: Vec<&str> = result
            .rejected_files
            .iter()
            .map(|f| f.entry_path.as_str())
            .collect();
        assert_eq!(paths, vec!["b.md", "a.md", "c.yaml"]);
    }

    #[test]
    fn test_safe_to_remove_follows_extension_set() {
        let records = vec![record("notes.md", false), record("build.yaml", false)];
        let result = scan_entries(Path::new("x.zip"), &records, &test_policy());
        assert!(result.rejected_files[0].safe_to_remove);
        assert!(!result.rejected_files[1].safe_to_remove);
    }
}
