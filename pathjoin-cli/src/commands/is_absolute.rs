//! Command to check whether a path is absolute.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;

/// Print whether a path is absolute.
#[derive(Args)]
pub struct IsAbsoluteCommand {
    /// Path to check
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    pub path: String,

    /// Exit with status 1 when the path is not absolute
    #[arg(long)]
    pub assert: bool,
}

impl IsAbsoluteCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let absolute = pathjoin::is_absolute(&self.path);
        global
            .logger()
            .debug(&format!("{:?} absolute: {absolute}", self.path));

        println!("{absolute}");

        if self.assert && !absolute {
            return Err(CliError::SemanticFailure(format!(
                "Path {:?} is not absolute",
                self.path
            )));
        }

        Ok(())
    }
}
