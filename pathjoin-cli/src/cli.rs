//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{CompletionsCommand, IsAbsoluteCommand, JoinCommand, ResolveCommand};
use clap::{Parser, Subcommand};

/// Command-line tool for joining, normalizing and resolving paths.
#[derive(Parser)]
#[command(name = "pathjoin")]
#[command(version, about = "Join, normalize and resolve paths lexically", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Join and normalize paths
    Join(JoinCommand),

    /// Resolve paths to an absolute path
    Resolve(ResolveCommand),

    /// Check whether a path is absolute
    IsAbsolute(IsAbsoluteCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
