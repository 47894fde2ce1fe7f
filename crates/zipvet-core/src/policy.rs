//! Extension policy configuration.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::Result;
use crate::VetError;
use crate::extension::EntryExt;

/// Default policy document embedded at build time.
const BUILTIN_POLICY: &str = include_str!("policy.json");

/// Immutable allow/deny policy for archive entries.
///
/// A `Policy` is loaded once per run and passed by reference into every
/// scan and fix call; there is no ambient or static lookup. Stored
/// strings are lower-cased once at construction, and lookups normalize
/// the probe instead of re-normalizing storage.
///
/// # Examples
///
/// ```
/// use zipvet_core::Policy;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let policy = Policy::builtin()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Policy {
    accepted: HashSet<String>,
    rejected: HashSet<String>,
    safe_to_remove_file_extensions: HashSet<String>,
    safe_to_remove_folders: HashSet<String>,
}

impl Policy {
    /// Loads the policy document embedded in the crate.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPolicy` if the embedded document is malformed.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_POLICY)
    }

    /// Loads a policy document from a file on disk.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPolicy` if the file cannot be read or parsed.
    /// Callers treat this as fatal at startup.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| {
            VetError::InvalidPolicy(format!("cannot read policy file {}: {e}", path.display()))
        })?;
        Self::from_json(&raw)
    }

    /// Parses a policy document from a JSON string.
    ///
    /// The document must carry exactly the four top-level arrays
    /// `accepted`, `rejected`, `safeToRemoveFileExtensions` and
    /// `safeToRemoveFolders`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPolicy` if the JSON is malformed or a field is
    /// missing.
    pub fn from_json(raw: &str) -> Result<Self> {
        let policy: Self =
            serde_json::from_str(raw).map_err(|e| VetError::InvalidPolicy(e.to_string()))?;
        Ok(policy.normalized())
    }

    /// Builds a policy directly from string collections.
    pub fn new<A, R, F, D>(accepted: A, rejected: R, safe_file_extensions: F, safe_folders: D) -> Self
    where
        A: IntoIterator,
        A::Item: Into<String>,
        R: IntoIterator,
        R::Item: Into<String>,
        F: IntoIterator,
        F::Item: Into<String>,
        D: IntoIterator,
        D::Item: Into<String>,
    {
        Self {
            accepted: accepted.into_iter().map(Into::into).collect(),
            rejected: rejected.into_iter().map(Into::into).collect(),
            safe_to_remove_file_extensions: safe_file_extensions
                .into_iter()
                .map(Into::into)
                .collect(),
            safe_to_remove_folders: safe_folders.into_iter().map(Into::into).collect(),
        }
        .normalized()
    }

    /// Lower-cases every stored string once, at load time.
    fn normalized(self) -> Self {
        fn lower(set: HashSet<String>) -> HashSet<String> {
            set.into_iter().map(|s| s.to_ascii_lowercase()).collect()
        }

        Self {
            accepted: lower(self.accepted),
            rejected: lower(self.rejected),
            safe_to_remove_file_extensions: lower(self.safe_to_remove_file_extensions),
            safe_to_remove_folders: lower(self.safe_to_remove_folders),
        }
    }

    /// Returns `true` iff the extension is a member of the accepted set.
    ///
    /// The accepted set is authoritative for final decisions; the
    /// `rejected` set never participates here.
    #[must_use]
    pub fn is_accepted(&self, ext: &EntryExt) -> bool {
        self.accepted.contains(ext.policy_key())
    }

    /// Returns `true` if the extension appears in the informational
    /// `rejected` set carried over from the policy document.
    #[must_use]
    pub fn is_listed_rejected(&self, ext: &EntryExt) -> bool {
        self.rejected.contains(ext.policy_key())
    }

    /// Returns `true` if a rejected file with this extension is
    /// considered safe to delete automatically.
    #[must_use]
    pub fn is_safe_to_remove_extension(&self, ext: &EntryExt) -> bool {
        self.safe_to_remove_file_extensions.contains(ext.policy_key())
    }

    /// Returns `true` if the folder name marks a whole subtree as out of
    /// scope / safe to delete. Matching is case-insensitive.
    #[must_use]
    pub fn is_safe_to_remove_folder(&self, name: &str) -> bool {
        self.safe_to_remove_folders
            .contains(&name.to_ascii_lowercase())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::extension::EntryExt;

    const NONE: [&str; 0] = [];

    fn named(ext: &str) -> EntryExt {
        EntryExt::Named(ext.to_string())
    }

    #[test]
    fn test_builtin_policy_parses() {
        let policy = Policy::builtin().unwrap();
        assert!(policy.is_accepted(&named("qext")));
        assert!(policy.is_safe_to_remove_folder(".idea"));
    }

    #[test]
    fn test_storage_is_lowercased_once() {
        let policy = Policy::new(["HTML", "Js"], ["MD"], ["LOG"], [".IDEA"]);
        assert!(policy.is_accepted(&named("html")));
        assert!(policy.is_accepted(&named("js")));
        assert!(policy.is_safe_to_remove_extension(&named("log")));
        assert!(policy.is_safe_to_remove_folder(".idea"));
        assert!(policy.is_safe_to_remove_folder(".IdeA"));
    }

    #[test]
    fn test_accepted_is_independent_of_rejected() {
        // "js" deliberately listed in both sets: accepted wins.
        let policy = Policy::new(["js"], ["js", "md"], NONE, NONE);
        assert!(policy.is_accepted(&named("js")));
        assert!(policy.is_listed_rejected(&named("js")));
        assert!(!policy.is_accepted(&named("md")));
    }

    #[test]
    fn test_blank_marker_is_policy_matchable() {
        let policy = Policy::new(["<blank>"], NONE, NONE, NONE);
        assert!(policy.is_accepted(&EntryExt::Blank));
    }

    #[test]
    fn test_malformed_json_is_fatal() {
        let result = Policy::from_json("{\"accepted\": [");
        assert!(matches!(result, Err(VetError::InvalidPolicy(_))));
    }

    #[test]
    fn test_missing_field_is_fatal() {
        let result = Policy::from_json(r#"{"accepted": [], "rejected": []}"#);
        assert!(matches!(result, Err(VetError::InvalidPolicy(_))));
    }

    #[test]
    fn test_from_file_missing_file() {
        let result = Policy::from_file("does/not/exist.json");
        assert!(matches!(result, Err(VetError::InvalidPolicy(_))));
    }
}
