//! Main entry point for the pathjoin CLI.
//!
//! This is the command-line interface for the pathjoin library:
//! - `join`: Join and normalize paths
//! - `resolve`: Resolve paths against the current directory
//! - `is-absolute`: Check whether a path is absolute
//! - `completions`: Generate shell completion scripts

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
    };

    let result = match cli.command {
        cli::Command::Join(cmd) => cmd.execute(&global),
        cli::Command::Resolve(cmd) => cmd.execute(&global),
        cli::Command::IsAbsolute(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
