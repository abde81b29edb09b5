//! Segment splitting and the `.`/`..` reducer.

/// The current directory segment.
pub const CURRENT_DIR: &str = ".";

/// The parent directory segment.
pub const PARENT_DIR: &str = "..";

/// Returns true for either path separator style (`/` or `\`).
#[must_use]
pub const fn is_separator(c: char) -> bool {
    c == '/' || c == '\\'
}

/// Folds a single segment into an accumulated segment sequence.
///
/// - `.` leaves the sequence unchanged.
/// - Any other segment is appended, and so is `..` when the sequence is
///   empty.
/// - `..` otherwise removes the last segment. When that segment is itself
///   `..`, the sequence has no real segments left to cancel, so both markers
///   are kept.
///
/// Designed to be used with [`Iterator::fold`].
///
/// # Examples
///
/// ```
/// use pathjoin::path::segments::reduce_segment;
///
/// assert_eq!(reduce_segment(vec!["a", "b", "c"], ".."), vec!["a", "b"]);
/// assert_eq!(reduce_segment(vec![], ".."), vec![".."]);
/// assert_eq!(reduce_segment(vec![".."], ".."), vec!["..", ".."]);
///
/// let folded = ["a", ".", "b", "..", "c"]
///     .into_iter()
///     .fold(Vec::new(), reduce_segment);
/// assert_eq!(folded, vec!["a", "c"]);
/// ```
#[must_use]
pub fn reduce_segment<'a>(mut segments: Vec<&'a str>, segment: &'a str) -> Vec<&'a str> {
    if segment == CURRENT_DIR {
        return segments;
    }

    if segment != PARENT_DIR {
        segments.push(segment);
        return segments;
    }

    match segments.pop() {
        None => segments.push(PARENT_DIR),
        Some(PARENT_DIR) => {
            segments.push(PARENT_DIR);
            segments.push(PARENT_DIR);
        }
        Some(_) => {}
    }
    segments
}

/// Splits the first input of a join into raw segments.
///
/// Trailing separators are trimmed first. A leading separator yields an
/// empty first segment (the root marker); empty segments from separator
/// runs anywhere else are dropped. A path made only of separators yields
/// just the root marker.
///
/// # Examples
///
/// ```
/// use pathjoin::path::segments::split_first;
///
/// assert_eq!(split_first("/a//b/"), vec!["", "a", "b"]);
/// assert_eq!(split_first("\\"), vec![""]);
/// assert_eq!(split_first("C:\\a"), vec!["C:", "a"]);
/// ```
#[must_use]
pub fn split_first(path: &str) -> Vec<&str> {
    let trimmed = path.trim_end_matches(is_separator);
    trimmed
        .split(is_separator)
        .enumerate()
        .filter(|(index, segment)| *index == 0 || !segment.is_empty())
        .map(|(_, segment)| segment)
        .collect()
}

/// Splits a subsequent input of a join into raw segments.
///
/// Leading and trailing separators are trimmed and empty segments dropped,
/// so these inputs never carry a root marker.
///
/// # Examples
///
/// ```
/// use pathjoin::path::segments::split_rest;
///
/// let segments: Vec<&str> = split_rest("/b\\\\c/").collect();
/// assert_eq!(segments, vec!["b", "c"]);
/// assert_eq!(split_rest("//").count(), 0);
/// ```
pub fn split_rest(path: &str) -> impl Iterator<Item = &str> {
    path.trim_matches(is_separator)
        .split(is_separator)
        .filter(|segment| !segment.is_empty())
}
