//! Utility functions for CLI operations.

use pathjoin::{init_logger, Logger};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,
}

impl GlobalOptions {
    /// Build a logger honoring the global flags and `PATHJOIN_LOG_MODE`.
    pub fn logger(&self) -> Logger {
        init_logger(self.verbose, self.quiet)
    }
}
