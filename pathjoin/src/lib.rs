#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # pathjoin
//!
//! A library for lexical, cross-platform path manipulation on strings.
//!
//! This library joins path segments, normalizes `.` and `..` components,
//! detects absolute paths in both Unix and Windows styles, and resolves
//! paths against the current working directory. Apart from reading the
//! working directory, nothing here touches the filesystem.
//!
//! ## Core API
//!
//! - [`join`] and [`normalize`]: Segment joining with `.`/`..` handling
//! - [`is_absolute`]: Unix, UNC and drive-letter absolute path detection
//! - [`resolve`] and [`PathResolver`]: Resolution against a working directory
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use pathjoin::{is_absolute, join};
//!
//! assert_eq!(join("a/b", &["./d/", "../../c/"]).unwrap(), "a/c");
//! assert_eq!(join("C:\\a\\b", &["./c/"]).unwrap(), "C:/a/b/c");
//!
//! assert!(is_absolute("/usr/bin"));
//! assert!(is_absolute("c:\\Windows"));
//! assert!(!is_absolute("relative/path"));
//! ```

pub mod error;
pub mod logging;
pub mod path;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{
    is_absolute, join, normalize, resolve, DriveLetter, PathResolver, ProcessWorkingDirectory,
    WorkingDirectory,
};
