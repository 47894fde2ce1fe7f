//! File-extension classification.

use std::fmt;

/// Policy key rendered for names that carry no dot-extension at all.
///
/// A distinguished sentinel rather than the empty string, so "no
/// extension" can be matched explicitly in a policy document.
pub const BLANK_MARKER: &str = "<blank>";

/// Canonical extension derived from an entry name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntryExt {
    /// The name has no dot-extension and no leading dot (`LICENSE`).
    Blank,
    /// A real extension, lower-cased (`html`, `gz`, `gitignore`).
    Named(String),
}

impl EntryExt {
    /// The string form used for policy set membership.
    #[must_use]
    pub fn policy_key(&self) -> &str {
        match self {
            Self::Blank => BLANK_MARKER,
            Self::Named(ext) => ext,
        }
    }
}

impl fmt::Display for EntryExt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.policy_key())
    }
}

/// Derives the canonical extension of a file or folder name.
///
/// Path separators (both `/` and `\`) are normalized away and only the
/// final segment is inspected:
///
/// - no dot at all (`LICENSE`) → [`EntryExt::Blank`]
/// - a dotfile with no further dot (`.gitignore`) → `Named("gitignore")`
/// - otherwise everything after the last dot, lower-cased
///   (`archive.tar.gz` → `Named("gz")`)
///
/// # Examples
///
/// ```
/// use zipvet_core::extension::EntryExt;
/// use zipvet_core::extension::extension_of;
///
/// assert_eq!(extension_of("page.HTML"), EntryExt::Named("html".to_string()));
/// assert_eq!(extension_of("LICENSE"), EntryExt::Blank);
/// ```
#[must_use]
pub fn extension_of(name: &str) -> EntryExt {
    let segment = name.rsplit(['/', '\\']).next().unwrap_or(name);

    let Some(last_dot) = segment.rfind('.') else {
        return EntryExt::Blank;
    };

    if last_dot == 0 {
        // Dotfile with no further dot: the name itself is the extension.
        return EntryExt::Named(segment[1..].to_ascii_lowercase());
    }

    EntryExt::Named(segment[last_dot + 1..].to_ascii_lowercase())
}
