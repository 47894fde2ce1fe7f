//! Extension-policy scanning and safe rewrite of zip-packaged
//! extensions.
//!
//! `zipvet-core` inspects a zip archive (a packaged application
//! extension), classifies every contained file and folder against an
//! allow/deny policy, and can produce a cleaned copy of the archive
//! with the disallowed entries removed after taking a backup.
//!
//! # Examples
//!
//! ```no_run
//! use zipvet_core::Policy;
//! use zipvet_core::check_archive;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let policy = Policy::builtin()?;
//! let result = check_archive("extension.zip", &policy)?;
//! println!("{} entries rejected", result.rejected_files.len());
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod backup;
pub mod batch;
pub mod check;
pub mod container;
pub mod error;
pub mod extension;
pub mod fix;
pub mod list;
pub mod policy;
pub mod scope;
pub mod test_utils;

// Re-export main API types
pub use batch::DirListing;
pub use batch::check_dir;
pub use batch::list_dir;
pub use batch::zips_in_dir;
pub use check::CheckResult;
pub use check::RejectedFile;
pub use check::RejectedFolder;
pub use check::check_archive;
pub use error::Result;
pub use error::VetError;
pub use extension::BLANK_MARKER;
pub use extension::EntryExt;
pub use extension::extension_of;
pub use fix::FixResult;
pub use fix::fix_archive;
pub use list::ExtensionUsage;
pub use list::list_entries;
pub use list::list_extensions;
pub use policy::Policy;
