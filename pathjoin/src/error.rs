//! Error types for the pathjoin library.
//!
//! Path manipulation is almost entirely infallible; the few failure modes
//! are collected here in a single `thiserror` enum.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a pathjoin error.
///
/// # Examples
///
/// ```
/// use pathjoin::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("a/b".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the pathjoin library.
#[derive(Debug, Error)]
pub enum Error {
    /// An argument could not be joined into a valid path.
    ///
    /// Raised when the first argument of a join is empty, or when a
    /// drive-rooted path would ascend above its drive root.
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// The reason the argument was rejected.
        reason: String,
    },

    /// A path obtained from the host could not be used.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The offending path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// An I/O error occurred while reading the working directory.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if error was caused by an invalid join argument.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathjoin::Error;
    ///
    /// let err = Error::InvalidArgument { reason: "empty".to_string() };
    /// assert!(err.is_invalid_argument());
    /// ```
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}
