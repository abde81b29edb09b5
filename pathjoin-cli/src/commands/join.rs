//! Command to join and normalize paths.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;

/// Join paths with '/' and resolve '.' and '..' segments.
#[derive(Args)]
pub struct JoinCommand {
    /// First path; may be rooted or start with a drive letter
    #[arg(value_name = "FIRST", allow_hyphen_values = true)]
    pub first: String,

    /// Further paths, always joined as relative paths
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    pub rest: Vec<String>,
}

impl JoinCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let logger = global.logger();
        logger.debug(&format!("Joining {:?} with {:?}", self.first, self.rest));

        let joined = pathjoin::join(&self.first, &self.rest)?;

        println!("{joined}");
        Ok(())
    }
}
