//! List command implementation

use crate::cli::ListArgs;
use crate::error::add_target_context;
use crate::output::OutputFormatter;
use anyhow::Result;
use zipvet_core::Policy;
use zipvet_core::list_extensions;

pub fn execute(args: &ListArgs, policy: &Policy, formatter: &dyn OutputFormatter) -> Result<()> {
    let mut usage = add_target_context(list_extensions(&args.archive, policy), &args.archive)?;

    // Most-used extensions first; ties keep first-appearance order.
    usage.sort_by(|a, b| b.count.cmp(&a.count));

    formatter.format_extension_list(&args.archive, &usage)
}
