//! Human-readable output formatter with colors and styling.

use super::formatter::OutputFormatter;
use anyhow::Result;
use console::Term;
use console::style;
use std::path::Path;
use zipvet_core::CheckResult;
use zipvet_core::DirListing;
use zipvet_core::ExtensionUsage;
use zipvet_core::FixResult;
use zipvet_core::RejectedFile;
use zipvet_core::RejectedFolder;

pub struct HumanFormatter {
    verbose: bool,
    quiet: bool,
    use_colors: bool,
    term: Term,
}

impl HumanFormatter {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            use_colors: console::colors_enabled(),
            term: Term::stdout(),
        }
    }

    fn line(&self, text: &str) {
        let _ = self.term.write_line(text);
    }

    fn removal_note(&self, safe_to_remove: bool) -> String {
        if safe_to_remove {
            if self.use_colors {
                format!("{}", style("(probably safe to remove)").green())
            } else {
                "(probably safe to remove)".to_string()
            }
        } else if self.use_colors {
            format!("{}", style("(double check before removing)").red())
        } else {
            "(double check before removing)".to_string()
        }
    }

    fn write_rejected_folders(&self, folders: &[RejectedFolder]) {
        if folders.is_empty() {
            return;
        }
        self.line("  Folders potentially rejected on import:");
        for folder in folders {
            self.line(&format!(
                "  - {} {}",
                folder.entry_path,
                self.removal_note(folder.safe_to_remove)
            ));
        }
    }

    fn write_rejected_files(&self, files: &[RejectedFile]) {
        if files.is_empty() {
            return;
        }
        self.line("  Files potentially rejected on import:");
        for file in files {
            if self.verbose {
                self.line(&format!(
                    "  - {} [{}] {}",
                    file.entry_path,
                    file.extension,
                    self.removal_note(file.safe_to_remove)
                ));
            } else {
                self.line(&format!(
                    "  - {} {}",
                    file.entry_path,
                    self.removal_note(file.safe_to_remove)
                ));
            }
        }
    }

    fn write_usage_table(&self, usage: &[ExtensionUsage]) {
        for item in usage {
            let verdict = if item.rejected {
                if self.use_colors {
                    format!("{}", style("( rejected )").red())
                } else {
                    "( rejected )".to_string()
                }
            } else if self.use_colors {
                format!("{}", style("( OK )").green())
            } else {
                "( OK )".to_string()
            };
            self.line(&format!(
                "  {:<12} {:>4} {}",
                item.extension, item.count, verdict
            ));
        }
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_check_result(&self, result: &CheckResult) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        self.line(&format!("Checking \"{}\"", result.checked_file.display()));
        self.line("");
        self.line("Overview:");
        self.line(&format!(
            "  {} files in {} directories",
            result.num_files, result.num_dirs
        ));
        self.line(&format!(
            "  {} files might not be accepted on import",
            result.rejected_files.len()
        ));
        self.line("");

        if result.is_clean() {
            if self.use_colors {
                self.line(&format!(
                    "{} Everything looks fine, go ahead.",
                    style("✓").green().bold()
                ));
            } else {
                self.line("Everything looks fine, go ahead.");
            }
            return Ok(());
        }

        self.line("Check result:");
        self.write_rejected_folders(&result.rejected_folders);
        self.write_rejected_files(&result.rejected_files);
        self.line("");
        self.line("Run `zipvet fix <ARCHIVE>` to remove the listed entries.");
        self.line("(A backup of the archive is created automatically.)");
        Ok(())
    }

    fn format_fix_result(&self, result: &FixResult) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        if result.nothing_removed() {
            if self.use_colors {
                self.line(&format!(
                    "{} All fine, nothing to fix",
                    style("✓").green().bold()
                ));
            } else {
                self.line("All fine, nothing to fix");
            }
            return Ok(());
        }

        if self.use_colors {
            self.line(&format!(
                "{} Removed {} files and {} folders",
                style("✓").green().bold(),
                result.removed_files.len(),
                result.removed_folders.len()
            ));
        } else {
            self.line(&format!(
                "Removed {} files and {} folders",
                result.removed_files.len(),
                result.removed_folders.len()
            ));
        }

        if self.verbose {
            for folder in &result.removed_folders {
                self.line(&format!("  - {}", folder.entry_path));
            }
            for file in &result.removed_files {
                self.line(&format!("  - {}", file.entry_path));
            }
        }

        if let Some(backup) = &result.backup_file {
            self.line(&format!(
                "The original archive has been backed up to \"{}\".",
                backup.display()
            ));
        }
        Ok(())
    }

    fn format_extension_list(&self, archive: &Path, usage: &[ExtensionUsage]) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        self.line(&format!(
            "Extension usage in \"{}\":",
            archive.display()
        ));
        self.write_usage_table(usage);

        if usage.iter().any(|u| u.rejected) {
            self.line("");
            self.line("One or more extensions will not be accepted on import.");
            self.line("Run `zipvet fix <ARCHIVE>` to remove those files.");
        } else {
            self.line("");
            if self.use_colors {
                self.line(&format!(
                    "{} Everything looks fine!",
                    style("✓").green().bold()
                ));
            } else {
                self.line("Everything looks fine!");
            }
        }
        Ok(())
    }

    fn format_entry_list(&self, extension: Option<&str>, entries: &[String]) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        match (extension, entries.is_empty()) {
            (Some(ext), true) => {
                self.line(&format!("Extension \"{ext}\" is not used at all."));
            }
            (Some(ext), false) => {
                self.line(&format!("Extension \"{ext}\" is used in the following entries:"));
            }
            (None, true) => self.line("The archive contains no in-scope entries."),
            (None, false) => self.line("In-scope entries:"),
        }
        for entry in entries {
            self.line(&format!("  - {entry}"));
        }
        Ok(())
    }

    fn format_dir_listings(&self, listings: &[DirListing]) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        for listing in listings {
            self.line(&format!("Results for {}:", listing.archive.display()));
            self.write_usage_table(&listing.extensions);
            self.line("");
        }
        Ok(())
    }

    fn format_dir_checks(&self, results: &[CheckResult]) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        for result in results {
            let rejected = result.rejected_files.len() + result.rejected_folders.len();
            if rejected == 0 {
                self.line(&format!("{}: clean", result.checked_file.display()));
            } else {
                self.line(&format!(
                    "{}: {} entries rejected",
                    result.checked_file.display(),
                    rejected
                ));
                if self.verbose {
                    self.write_rejected_folders(&result.rejected_folders);
                    self.write_rejected_files(&result.rejected_files);
                }
            }
        }
        Ok(())
    }

    fn format_warning(&self, message: &str) {
        if self.quiet {
            return;
        }

        if self.use_colors {
            self.line(&format!("{} {message}", style("WARNING:").yellow().bold()));
        } else {
            self.line(&format!("WARNING: {message}"));
        }
    }
}
