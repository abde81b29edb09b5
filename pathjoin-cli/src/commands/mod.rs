//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `join`: Join and normalize paths
//! - `resolve`: Resolve paths against the current directory
//! - `is_absolute`: Check whether a path is absolute
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod is_absolute;
pub mod join;
pub mod resolve;

pub use completions::CompletionsCommand;
pub use is_absolute::IsAbsoluteCommand;
pub use join::JoinCommand;
pub use resolve::ResolveCommand;
