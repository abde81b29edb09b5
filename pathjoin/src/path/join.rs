//! Joining and normalizing path strings.

use crate::error::{Error, Result};
use crate::path::segments::{reduce_segment, split_first, split_rest, PARENT_DIR};
use crate::path::types::DriveLetter;

/// Join path strings into a single normalized path using `/` separators.
///
/// The first input may carry a leading separator (kept as a leading `/`)
/// or a drive letter (kept as `<letter>:/`). Later inputs are always treated
/// as relative to what precedes them, and `.`/`..` segments are resolved
/// across all inputs.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if:
/// - `first` is empty
/// - `first` starts with a drive letter and the joined path would ascend
///   above it
///
/// # Examples
///
/// ```
/// use pathjoin::path::join;
///
/// assert_eq!(join("a", &["b", "c"]).unwrap(), "a/b/c");
/// assert_eq!(join("a\\", &["/b/c/", "\\d"]).unwrap(), "a/b/c/d");
/// assert_eq!(join("/a/b", &["./c/"]).unwrap(), "/a/b/c");
/// assert_eq!(join("a", &["..", "../b/", "c"]).unwrap(), "../b/c");
///
/// assert!(join("", &["foo", "bar"]).is_err());
/// ```
pub fn join<S: AsRef<str>>(first: &str, rest: &[S]) -> Result<String> {
    if first.is_empty() {
        return Err(Error::InvalidArgument {
            reason: "the first path must not be empty".to_string(),
        });
    }

    let mut first_segments = split_first(first);
    let drive = first_segments
        .first()
        .copied()
        .and_then(DriveLetter::parse);
    if let Some(drive) = drive {
        log::debug!("Detected drive letter {drive} in {first:?}");
        first_segments.remove(0);
    }

    let segments = rest.iter().map(AsRef::<str>::as_ref).fold(
        first_segments.into_iter().fold(Vec::new(), reduce_segment),
        |acc, path| split_rest(path).fold(acc, reduce_segment),
    );

    let joined = segments.join("/");
    match drive {
        Some(drive) if segments.first() == Some(&PARENT_DIR) => {
            log::debug!("Rejected {joined:?}: ascends above drive {drive}");
            Err(Error::InvalidArgument {
                reason: format!("path cannot ascend above the root of drive {drive}"),
            })
        }
        Some(drive) => Ok(format!("{drive}/{joined}")),
        None => Ok(joined),
    }
}

/// Normalize a single path string.
///
/// Equivalent to [`join`] with no further inputs. Normalization is a fixed
/// point: normalizing the result of a join returns it unchanged.
///
/// # Errors
///
/// Same conditions as [`join`].
///
/// # Examples
///
/// ```
/// use pathjoin::path::normalize;
///
/// assert_eq!(normalize("/a/./b/../c/").unwrap(), "/a/c");
/// assert_eq!(normalize("C:\\a\\..\\b").unwrap(), "C:/b");
/// assert_eq!(normalize("../../x").unwrap(), "../../x");
/// ```
pub fn normalize(path: &str) -> Result<String> {
    join::<&str>(path, &[])
}
