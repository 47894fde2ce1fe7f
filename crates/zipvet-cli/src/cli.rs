//! CLI argument parsing using clap.

use clap::Parser;
use clap::Subcommand;
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "zipvet")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Policy file overriding the built-in extension policy
    #[arg(long, global = true, value_name = "FILE")]
    pub policy: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check a packaged extension against the policy
    Check(CheckArgs),
    /// Remove rejected entries after backing up the archive
    Fix(FixArgs),
    /// List file-extension usage inside an archive
    List(ListArgs),
    /// List entry paths, optionally filtered by extension
    Entries(EntriesArgs),
    /// Run over every zip archive directly inside a directory
    Dir(DirArgs),
    /// Generate shell completions
    Completion(CompletionArgs),
}

#[derive(clap::Args)]
pub struct CheckArgs {
    /// Path to the zip archive
    #[arg(value_name = "ARCHIVE")]
    pub archive: PathBuf,
}

#[derive(clap::Args)]
pub struct FixArgs {
    /// Path to the zip archive
    #[arg(value_name = "ARCHIVE")]
    pub archive: PathBuf,

    /// Rewrite in place without taking a backup first
    #[arg(long)]
    pub no_backup: bool,
}

#[derive(clap::Args)]
pub struct ListArgs {
    /// Path to the zip archive
    #[arg(value_name = "ARCHIVE")]
    pub archive: PathBuf,
}

#[derive(clap::Args)]
pub struct EntriesArgs {
    /// Path to the zip archive
    #[arg(value_name = "ARCHIVE")]
    pub archive: PathBuf,

    /// Extension to filter by (leading dot optional)
    #[arg(value_name = "EXTENSION")]
    pub extension: Option<String>,
}

#[derive(clap::Args)]
pub struct DirArgs {
    /// Directory containing zip archives
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,

    /// Run a full policy check per archive instead of a usage listing
    #[arg(long)]
    pub check: bool,
}

#[derive(clap::Args)]
pub struct CompletionArgs {
    /// Target shell
    #[arg(value_enum, value_name = "SHELL")]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_fix_defaults_to_backup() {
        let cli = Cli::parse_from(["zipvet", "fix", "sample.zip"]);
        match cli.command {
            Commands::Fix(args) => assert!(!args.no_backup),
            _ => panic!("expected fix subcommand"),
        }
    }
}
