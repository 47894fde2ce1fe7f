//! Property-based tests for classification and scope rules.
//!
//! These tests use proptest to generate arbitrary entry names and
//! verify the classifier/scope invariants hold across a wide range of
//! cases.

#![allow(clippy::expect_used)]

use proptest::prelude::*;
use zipvet_core::EntryExt;
use zipvet_core::Policy;
use zipvet_core::extension_of;
use zipvet_core::scope::direct_parent_folder;
use zipvet_core::scope::is_out_of_scope;
use zipvet_core::scope::path_segments;

const NONE: [&str; 0] = [];

proptest! {
    /// Names without any dot classify as the blank marker.
    #[test]
    fn prop_dotless_names_are_blank(name in "[a-zA-Z0-9_-]{1,20}") {
        prop_assert_eq!(extension_of(&name), EntryExt::Blank);
    }

    /// A named extension is always fully lower-cased.
    #[test]
    fn prop_named_extensions_are_lowercase(
        stem in "[a-zA-Z0-9_-]{1,10}",
        ext in "[a-zA-Z0-9]{1,8}"
    ) {
        let name = format!("{stem}.{ext}");
        match extension_of(&name) {
            EntryExt::Named(found) => {
                prop_assert_eq!(found, ext.to_ascii_lowercase());
            }
            EntryExt::Blank => prop_assert!(false, "dotted name classified blank"),
        }
    }

    /// Only the final suffix of a multi-dot name matters.
    #[test]
    fn prop_final_suffix_wins(
        parts in prop::collection::vec("[a-z0-9]{1,6}", 2..5)
    ) {
        let name = parts.join(".");
        let expected = parts.last().expect("at least two parts").clone();
        prop_assert_eq!(extension_of(&name), EntryExt::Named(expected));
    }

    /// Leading directories never change the classification.
    #[test]
    fn prop_parent_dirs_are_ignored(
        dirs in prop::collection::vec("[a-z0-9]{1,8}", 0..4),
        file in "[a-z0-9]{1,8}\\.[a-z0-9]{1,6}"
    ) {
        let mut path = dirs.join("/");
        if !path.is_empty() {
            path.push('/');
        }
        path.push_str(&file);
        prop_assert_eq!(extension_of(&path), extension_of(&file));
    }

    /// The direct parent is the second-to-last segment of a file path.
    #[test]
    fn prop_direct_parent_is_penultimate_segment(
        dirs in prop::collection::vec("[a-z0-9]{1,8}", 1..5),
        file in "[a-z0-9]{1,8}\\.[a-z]{1,4}"
    ) {
        let path = format!("{}/{file}", dirs.join("/"));
        prop_assert_eq!(
            direct_parent_folder(&path),
            dirs.last().expect("at least one dir").as_str()
        );
        prop_assert_eq!(path_segments(&path).len(), dirs.len() + 1);
    }

    /// Any file anywhere below a safe-to-remove folder is out of scope.
    #[test]
    fn prop_safe_folder_excludes_any_depth(
        above in prop::collection::vec("[a-z0-9]{1,6}", 0..3),
        below in prop::collection::vec("[a-z0-9]{1,6}", 0..3),
        file in "[a-z0-9]{1,6}\\.[a-z]{1,4}"
    ) {
        let policy = Policy::new(["js"], NONE, NONE, ["node_modules"]);
        let mut segments = above;
        segments.push("node_modules".to_string());
        segments.extend(below);
        segments.push(file);
        let path = segments.join("/");
        prop_assert!(is_out_of_scope(&path, &policy));
    }

    /// Paths made only of visible, unlisted folders stay in scope.
    #[test]
    fn prop_plain_paths_stay_in_scope(
        dirs in prop::collection::vec("[a-z][a-z0-9]{0,6}", 0..4),
        file in "[a-z][a-z0-9]{0,6}\\.[a-z]{1,4}"
    ) {
        let policy = Policy::new(["js"], NONE, NONE, ["node_modules"]);
        let mut segments = dirs;
        segments.retain(|d| d != "node_modules");
        segments.push(file);
        let path = segments.join("/");
        prop_assert!(!is_out_of_scope(&path, &policy));
    }
}
