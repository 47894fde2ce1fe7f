//! Output formatter trait for CLI results.

use anyhow::Result;
use serde::Serialize;
use std::path::Path;
use zipvet_core::CheckResult;
use zipvet_core::DirListing;
use zipvet_core::ExtensionUsage;
use zipvet_core::FixResult;

/// Common output formatter trait
pub trait OutputFormatter {
    /// Format the result of one archive check
    fn format_check_result(&self, result: &CheckResult) -> Result<()>;

    /// Format the result of one archive fix
    fn format_fix_result(&self, result: &FixResult) -> Result<()>;

    /// Format extension usage for one archive
    fn format_extension_list(&self, archive: &Path, usage: &[ExtensionUsage]) -> Result<()>;

    /// Format matching entry paths for one archive
    fn format_entry_list(&self, extension: Option<&str>, entries: &[String]) -> Result<()>;

    /// Format extension usage for a directory of archives
    fn format_dir_listings(&self, listings: &[DirListing]) -> Result<()>;

    /// Format check results for a directory of archives
    fn format_dir_checks(&self, results: &[CheckResult]) -> Result<()>;

    /// Format warning message
    fn format_warning(&self, message: &str);
}

/// Generic JSON output structure
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    pub operation: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
}

impl<T: Serialize> JsonOutput<T> {
    pub fn success(operation: impl Into<String>, data: T) -> Self {
        Self {
            operation: operation.into(),
            status: Status::Success,
            data: Some(data),
            error: None,
        }
    }
}
