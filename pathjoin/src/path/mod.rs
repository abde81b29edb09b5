//! Lexical path joining, normalization and resolution.
//!
//! Every function in this module works on strings and never consults the
//! filesystem, with the single exception of [`resolve`], which reads the
//! current working directory.
//!
//! # Key Concepts
//!
//! ## Segments
//!
//! Inputs are split on any run of `/` or `\`. Each resulting segment is
//! folded into an ordered sequence by [`segments::reduce_segment`]:
//! - `.` is discarded
//! - `..` cancels the previous real segment
//! - `..` with nothing left to cancel is kept, so runs of unresolvable `..`
//!   grow instead of collapsing
//!
//! ## Roots and Drive Letters
//!
//! A first input that begins with a separator produces an empty leading
//! segment, which renders as the leading `/` of the result. A first input
//! whose first segment is a drive letter such as `C:` has it set aside and
//! reattached at the end; such a path may never ascend above its drive.
//! Drive letters are only recognized on the first input.
//!
//! # Examples
//!
//! ```
//! use pathjoin::path::{is_absolute, join};
//!
//! assert_eq!(join("/", &["a", "b"]).unwrap(), "/a/b");
//! assert_eq!(join("a", &["..", "../b/", "c"]).unwrap(), "../b/c");
//! assert!(join("C:\\foo", &["..", ".."]).is_err());
//!
//! assert!(is_absolute("\\\\server\\share"));
//! ```
//!
//! Resolution against the working directory:
//!
//! ```
//! use pathjoin::path::resolve;
//!
//! assert_eq!(resolve("/a", &["b/c"]).unwrap(), "/a/b/c");
//! assert_eq!(resolve("C:\\a", &["b/c"]).unwrap(), "C:/a/b/c");
//! ```

pub mod absolute;
pub mod join;
pub mod resolver;
pub mod segments;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use absolute::is_absolute;
pub use join::{join, normalize};
pub use resolver::{resolve, PathResolver, ProcessWorkingDirectory, WorkingDirectory};
pub use types::DriveLetter;
