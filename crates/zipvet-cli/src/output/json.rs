//! JSON output formatter for machine-readable results.

use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use std::io::{self};
use std::path::Path;
use zipvet_core::CheckResult;
use zipvet_core::DirListing;
use zipvet_core::ExtensionUsage;
use zipvet_core::FixResult;

pub struct JsonFormatter;

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_check_result(&self, result: &CheckResult) -> Result<()> {
        let output = JsonOutput::success("check", result);
        Self::output(&output)
    }

    fn format_fix_result(&self, result: &FixResult) -> Result<()> {
        let output = JsonOutput::success("fix", result);
        Self::output(&output)
    }

    fn format_extension_list(&self, archive: &Path, usage: &[ExtensionUsage]) -> Result<()> {
        #[derive(Serialize)]
        struct ListOutput<'a> {
            archive: String,
            extensions: &'a [ExtensionUsage],
        }

        let data = ListOutput {
            archive: archive.display().to_string(),
            extensions: usage,
        };
        let output = JsonOutput::success("list", data);
        Self::output(&output)
    }

    fn format_entry_list(&self, extension: Option<&str>, entries: &[String]) -> Result<()> {
        #[derive(Serialize)]
        struct EntriesOutput<'a> {
            #[serde(skip_serializing_if = "Option::is_none")]
            extension: Option<&'a str>,
            entries: &'a [String],
        }

        let data = EntriesOutput { extension, entries };
        let output = JsonOutput::success("entries", data);
        Self::output(&output)
    }

    fn format_dir_listings(&self, listings: &[DirListing]) -> Result<()> {
        let output = JsonOutput::success("dir", listings);
        Self::output(&output)
    }

    fn format_dir_checks(&self, results: &[CheckResult]) -> Result<()> {
        let output = JsonOutput::success("dir-check", results);
        Self::output(&output)
    }

    fn format_warning(&self, _message: &str) {
        // Warnings are not part of the JSON contract.
    }
}
