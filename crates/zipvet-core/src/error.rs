//! Error types for archive scanning and rewriting.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using `VetError`.
pub type Result<T> = std::result::Result<T, VetError>;

/// Errors that can occur while scanning or rewriting an archive.
#[derive(Error, Debug)]
pub enum VetError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The given path does not resolve to an existing file.
    #[error("file not found: {path}")]
    FileNotFound {
        /// The path that was probed.
        path: PathBuf,
    },

    /// The given file does not carry the recognized container extension.
    #[error("not a zip archive: {path}")]
    NotAnArchive {
        /// The offending path.
        path: PathBuf,
    },

    /// Batch mode was pointed at a directory that does not exist.
    #[error("directory not found: {path}")]
    DirectoryNotFound {
        /// The directory that was probed.
        path: PathBuf,
    },

    /// The container is corrupted or cannot be parsed.
    #[error("invalid archive: {0}")]
    InvalidArchive(String),

    /// The policy document is missing or malformed.
    #[error("invalid policy: {0}")]
    InvalidPolicy(String),

    /// No backup could be created, or it did not survive verification.
    #[error("backup creation failed: {reason}")]
    BackupFailed {
        /// What went wrong.
        reason: String,
    },

    /// The decompress/recompress/replace pipeline failed. The original
    /// archive is left untouched when this is returned.
    #[error("archive rewrite failed: {reason}")]
    RewriteFailed {
        /// What went wrong.
        reason: String,
    },
}

impl VetError {
    /// Returns `true` if the error concerns the input path rather than
    /// the archive's contents.
    #[must_use]
    pub const fn is_path_error(&self) -> bool {
        matches!(
            self,
            Self::FileNotFound { .. } | Self::NotAnArchive { .. } | Self::DirectoryNotFound { .. }
        )
    }
}
