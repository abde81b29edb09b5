//! Absolute path detection for Unix and Windows path styles.

use crate::path::segments::is_separator;
use crate::path::types::DriveLetter;

/// Check whether a path string is absolute.
///
/// A path is absolute if it starts with:
/// - `/` (Unix root)
/// - `\` (Windows root, including UNC paths such as `\\server\share`)
/// - a drive letter like `C:` followed by a separator or nothing at all
///
/// Drive-relative paths such as `C:foo` are not absolute. The empty string
/// is not absolute.
///
/// # Examples
///
/// ```
/// use pathjoin::path::is_absolute;
///
/// assert!(is_absolute("/some/absolute/path"));
/// assert!(is_absolute("\\server\\share"));
/// assert!(is_absolute("c:\\Users\\someone"));
///
/// assert!(!is_absolute(""));
/// assert!(!is_absolute("../../rel/path"));
/// assert!(!is_absolute("C:relative"));
/// ```
#[must_use]
pub fn is_absolute(path: &str) -> bool {
    path.starts_with(is_separator) || DriveLetter::is_prefix_of(path)
}
