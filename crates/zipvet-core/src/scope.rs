//! Folder-scope rules for archive entry paths.
//!
//! An entry can be taken out of policy scope by its position in the
//! folder tree alone: a hidden direct parent, or any ancestor folder
//! listed as safe to remove. Out-of-scope files are invisible to the
//! scanner: neither counted nor evaluated for rejection.

use crate::policy::Policy;

/// Returns the name of the entry's direct parent folder.
///
/// This is the last non-empty path segment strictly before the final
/// component; the empty string when the entry sits at the archive root.
/// For a directory path (trailing separator) the final component is
/// empty, so this resolves to the directory's own name segment.
#[must_use]
pub fn direct_parent_folder(path: &str) -> &str {
    let components: Vec<&str> = path.split(['/', '\\']).collect();
    let Some((_, ancestors)) = components.split_last() else {
        return "";
    };
    ancestors
        .iter()
        .rev()
        .find(|segment| !segment.is_empty())
        .copied()
        .unwrap_or("")
}

/// Returns every non-empty path segment, top to bottom.
#[must_use]
pub fn path_segments(path: &str) -> Vec<&str> {
    path.split(['/', '\\'])
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// Returns `true` when the entry is out of policy scope.
///
/// A path is out of scope when its direct parent folder is hidden
/// (leading `.`) or when any segment along the path, at any depth,
/// matches a safe-to-remove folder.
#[must_use]
pub fn is_out_of_scope(path: &str, policy: &Policy) -> bool {
    if direct_parent_folder(path).starts_with('.') {
        return true;
    }
    path_segments(path)
        .into_iter()
        .any(|segment| policy.is_safe_to_remove_folder(segment))
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: [&str; 0] = [];

    fn policy_with_folders(folders: &[&str]) -> Policy {
        Policy::new(["js"], NONE, NONE, folders.iter().copied())
    }

    #[test]
    fn test_direct_parent_of_directory_path() {
        assert_eq!(direct_parent_folder("sub/.build/"), ".build");
        assert_eq!(direct_parent_folder("./sub/.build/"), ".build");
        assert_eq!(direct_parent_folder("./sub/test/"), "test");
    }

    #[test]
    fn test_direct_parent_of_file_path() {
        assert_eq!(direct_parent_folder("./sub/.build"), "sub");
        assert_eq!(direct_parent_folder("./sub/.gitignore"), "sub");
        assert_eq!(direct_parent_folder("lib/js/app.js"), "js");
    }

    #[test]
    fn test_root_entries_have_no_parent() {
        assert_eq!(direct_parent_folder("file.txt"), "");
        assert_eq!(direct_parent_folder("LICENSE"), "");
    }

    #[test]
    fn test_path_segments_drop_empty_parts() {
        assert_eq!(path_segments("a/b/c.txt"), vec!["a", "b", "c.txt"]);
        assert_eq!(path_segments("a/b/"), vec!["a", "b"]);
        assert_eq!(path_segments("a\\b\\c.txt"), vec!["a", "b", "c.txt"]);
    }

    #[test]
    fn test_hidden_parent_is_out_of_scope() {
        let policy = policy_with_folders(&[]);
        assert!(is_out_of_scope(".build/file1.txt", &policy));
        assert!(is_out_of_scope("sub/.idea/settings.xml", &policy));
        assert!(!is_out_of_scope(".gitignore", &policy));
        assert!(!is_out_of_scope("sub/file.js", &policy));
    }

    #[test]
    fn test_safe_folder_match_at_any_depth() {
        let policy = policy_with_folders(&["node_modules"]);
        assert!(is_out_of_scope("node_modules/pkg/index.js", &policy));
        assert!(is_out_of_scope("a/b/node_modules/c/d.js", &policy));
        assert!(!is_out_of_scope("a/b/c/d.js", &policy));
    }

    #[test]
    fn test_hidden_ancestor_beyond_parent_stays_in_scope() {
        // Only the direct parent's hiddenness matters for the dot rule.
        let policy = policy_with_folders(&[]);
        assert!(!is_out_of_scope(".secret/sub/file.txt", &policy));
    }
}
