//! Dir command implementation

use crate::cli::DirArgs;
use crate::error::add_target_context;
use crate::output::OutputFormatter;
use anyhow::Result;
use zipvet_core::Policy;
use zipvet_core::check_dir;
use zipvet_core::list_dir;
use zipvet_core::zips_in_dir;

pub fn execute(args: &DirArgs, policy: &Policy, formatter: &dyn OutputFormatter) -> Result<()> {
    let archives = add_target_context(zips_in_dir(&args.dir), &args.dir)?;
    if archives.is_empty() {
        formatter.format_warning(&format!(
            "no zip archives found in {}",
            args.dir.display()
        ));
        return Ok(());
    }

    if args.check {
        let results = add_target_context(check_dir(&args.dir, policy), &args.dir)?;
        formatter.format_dir_checks(&results)
    } else {
        let listings = add_target_context(list_dir(&args.dir, policy), &args.dir)?;
        formatter.format_dir_listings(&listings)
    }
}
