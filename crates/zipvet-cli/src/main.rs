//! Zipvet CLI - Command-line utility for checking and cleaning
//! zip-packaged extensions against an extension policy.

mod cli;
mod commands;
mod error;
mod output;

use anyhow::Context;
use anyhow::Result;
use clap::Parser;
use zipvet_core::Policy;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    if let cli::Commands::Completion(args) = &cli.command {
        commands::completion::execute(args.shell);
        return Ok(());
    }

    let formatter = output::create_formatter(cli.json, cli.verbose, cli.quiet);

    // The policy is loaded exactly once and passed down read-only.
    let policy = match &cli.policy {
        Some(path) => Policy::from_file(path)
            .with_context(|| format!("failed to load policy from {}", path.display()))?,
        None => Policy::builtin().context("built-in policy document is malformed")?,
    };

    match &cli.command {
        cli::Commands::Check(args) => commands::check::execute(args, &policy, &*formatter),
        cli::Commands::Fix(args) => commands::fix::execute(args, &policy, &*formatter),
        cli::Commands::List(args) => commands::list::execute(args, &policy, &*formatter),
        cli::Commands::Entries(args) => commands::entries::execute(args, &policy, &*formatter),
        cli::Commands::Dir(args) => commands::dir::execute(args, &policy, &*formatter),
        cli::Commands::Completion(_) => Ok(()),
    }
}
