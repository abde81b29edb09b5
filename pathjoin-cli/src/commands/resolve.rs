//! Command to resolve paths to an absolute path.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use pathjoin::{is_absolute, PathResolver};

/// Resolve paths against the current directory unless the first is absolute.
#[derive(Args)]
pub struct ResolveCommand {
    /// First path; relative paths are placed under the current directory
    #[arg(value_name = "FIRST", allow_hyphen_values = true)]
    pub first: String,

    /// Further paths, always joined as relative paths
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    pub rest: Vec<String>,
}

impl ResolveCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let logger = global.logger();
        if !self.first.is_empty() && !is_absolute(&self.first) {
            logger.info(&format!(
                "{:?} is relative, resolving against the current directory",
                self.first
            ));
        }

        let resolved = PathResolver::new().resolve(&self.first, &self.rest)?;

        println!("{resolved}");
        Ok(())
    }
}
