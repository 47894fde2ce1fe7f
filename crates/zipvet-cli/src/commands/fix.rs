//! Fix command implementation

use crate::cli::FixArgs;
use crate::error::add_target_context;
use crate::output::OutputFormatter;
use anyhow::Result;
use zipvet_core::Policy;
use zipvet_core::fix_archive;

pub fn execute(args: &FixArgs, policy: &Policy, formatter: &dyn OutputFormatter) -> Result<()> {
    let make_backup = !args.no_backup;
    let result = add_target_context(fix_archive(&args.archive, policy, make_backup), &args.archive)?;
    formatter.format_fix_result(&result)
}
