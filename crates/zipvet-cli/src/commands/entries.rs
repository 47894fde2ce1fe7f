//! Entries command implementation

use crate::cli::EntriesArgs;
use crate::error::add_target_context;
use crate::output::OutputFormatter;
use anyhow::Result;
use zipvet_core::Policy;
use zipvet_core::list_entries;

pub fn execute(args: &EntriesArgs, policy: &Policy, formatter: &dyn OutputFormatter) -> Result<()> {
    let extension = args.extension.as_deref();
    let entries = add_target_context(list_entries(&args.archive, policy, extension), &args.archive)?;
    formatter.format_entry_list(extension, &entries)
}
