//! Check command implementation

use crate::cli::CheckArgs;
use crate::error::add_target_context;
use crate::output::OutputFormatter;
use anyhow::Result;
use zipvet_core::Policy;
use zipvet_core::check_archive;

pub fn execute(args: &CheckArgs, policy: &Policy, formatter: &dyn OutputFormatter) -> Result<()> {
    let result = add_target_context(check_archive(&args.archive, policy), &args.archive)?;
    formatter.format_check_result(&result)
}
