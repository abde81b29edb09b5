//! Logging infrastructure for pathjoin.
//!
//! Library internals report through the `log` facade. This module adds a
//! small stderr logger for user-facing diagnostics whose verbosity comes
//! from CLI flags or the `PATHJOIN_LOG_MODE` environment variable.

use std::env;
use std::fmt;

/// Environment variable consulted by [`init_logger`].
pub const LOG_MODE_ENV: &str = "PATHJOIN_LOG_MODE";

/// Logging level for controlling output verbosity.
///
/// Log levels are ordered from least verbose (Quiet) to most verbose (Verbose).
///
/// # Examples
///
/// ```
/// use pathjoin::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert!(LogLevel::Normal < LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Suppress all non-essential output.
    Quiet,
    /// Errors and warnings.
    Normal,
    /// Errors, warnings, info, and debug messages.
    Verbose,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quiet => write!(f, "quiet"),
            Self::Normal => write!(f, "normal"),
            Self::Verbose => write!(f, "verbose"),
        }
    }
}

impl LogLevel {
    /// Parses a log level from a string (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not one of `quiet`, `normal` or
    /// `verbose`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathjoin::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("VERBOSE").unwrap(), LogLevel::Verbose);
    /// assert!(LogLevel::parse("loud").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log level: {s}")),
        }
    }
}

/// A simple stderr-based logger.
///
/// Only messages at or above the configured level are written.
///
/// # Examples
///
/// ```
/// use pathjoin::{Logger, LogLevel};
///
/// let logger = Logger::new(LogLevel::Normal);
/// logger.warn("printed");
/// logger.info("not printed (requires Verbose)");
/// ```
#[derive(Debug)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a new logger with the specified log level.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Returns the current log level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Logs an error message unless the level is Quiet.
    pub fn error(&self, message: &str) {
        if self.level >= LogLevel::Normal {
            eprintln!("ERROR: {message}");
        }
    }

    /// Logs a warning message at Normal and Verbose levels.
    pub fn warn(&self, message: &str) {
        if self.level >= LogLevel::Normal {
            eprintln!("WARN: {message}");
        }
    }

    /// Logs an informational message at Verbose level.
    pub fn info(&self, message: &str) {
        if self.level >= LogLevel::Verbose {
            eprintln!("INFO: {message}");
        }
    }

    /// Logs a debug message at Verbose level.
    pub fn debug(&self, message: &str) {
        if self.level >= LogLevel::Verbose {
            eprintln!("DEBUG: {message}");
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

/// Initializes a logger based on CLI flags and the environment.
///
/// The priority order is:
/// 1. CLI flags (`verbose` wins over `quiet`)
/// 2. `PATHJOIN_LOG_MODE` environment variable
/// 3. Default (Normal)
///
/// # Examples
///
/// ```
/// use pathjoin::{init_logger, LogLevel};
///
/// let logger = init_logger(true, false);
/// assert_eq!(logger.level(), LogLevel::Verbose);
/// ```
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    if verbose {
        return Logger::new(LogLevel::Verbose);
    }
    if quiet {
        return Logger::new(LogLevel::Quiet);
    }

    if let Ok(env_value) = env::var(LOG_MODE_ENV) {
        if let Ok(level) = LogLevel::parse(&env_value) {
            return Logger::new(level);
        }
    }

    Logger::new(LogLevel::Normal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    /// Restores `PATHJOIN_LOG_MODE` to its previous value on drop.
    struct EnvGuard {
        old_value: Option<String>,
    }

    impl EnvGuard {
        fn set(value: Option<&str>) -> Self {
            let old_value = env::var(LOG_MODE_ENV).ok();
            match value {
                Some(v) => env::set_var(LOG_MODE_ENV, v),
                None => env::remove_var(LOG_MODE_ENV),
            }
            Self { old_value }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            match &self.old_value {
                Some(v) => env::set_var(LOG_MODE_ENV, v),
                None => env::remove_var(LOG_MODE_ENV),
            }
        }
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(format!("{}", LogLevel::Quiet), "quiet");
        assert_eq!(format!("{}", LogLevel::Normal), "normal");
        assert_eq!(format!("{}", LogLevel::Verbose), "verbose");
    }

    #[test]
    fn test_log_level_parse() {
        assert_eq!(LogLevel::parse("quiet").unwrap(), LogLevel::Quiet);
        assert_eq!(LogLevel::parse("Normal").unwrap(), LogLevel::Normal);
        assert_eq!(LogLevel::parse("VERBOSE").unwrap(), LogLevel::Verbose);

        assert!(LogLevel::parse("invalid").is_err());
        assert!(LogLevel::parse("").is_err());
    }

    #[test]
    fn test_logger_default() {
        assert_eq!(Logger::default().level(), LogLevel::Normal);
    }

    #[test]
    fn test_init_logger_flags() {
        assert_eq!(init_logger(true, false).level(), LogLevel::Verbose);
        assert_eq!(init_logger(false, true).level(), LogLevel::Quiet);
        // verbose takes precedence
        assert_eq!(init_logger(true, true).level(), LogLevel::Verbose);
    }

    #[test]
    #[serial]
    fn test_init_logger_defaults() {
        let _guard = EnvGuard::set(None);
        assert_eq!(init_logger(false, false).level(), LogLevel::Normal);
    }

    #[test]
    #[serial]
    fn test_init_logger_from_env() {
        let _guard = EnvGuard::set(Some("verbose"));
        assert_eq!(init_logger(false, false).level(), LogLevel::Verbose);

        env::set_var(LOG_MODE_ENV, "quiet");
        assert_eq!(init_logger(false, false).level(), LogLevel::Quiet);
    }

    #[test]
    #[serial]
    fn test_init_logger_env_invalid_fallback() {
        let _guard = EnvGuard::set(Some("invalid"));
        assert_eq!(init_logger(false, false).level(), LogLevel::Normal);
    }

    #[test]
    #[serial]
    fn test_init_logger_cli_overrides_env() {
        let _guard = EnvGuard::set(Some("quiet"));
        assert_eq!(init_logger(true, false).level(), LogLevel::Verbose);
    }
}
