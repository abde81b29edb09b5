//! Core types for path handling.

use std::fmt;

/// A Windows drive letter prefix such as `C:`.
///
/// Drive letters are recognized only as a whole segment made of one ASCII
/// letter followed by a colon. The letter's case is preserved.
///
/// # Examples
///
/// ```
/// use pathjoin::path::DriveLetter;
///
/// let drive = DriveLetter::parse("c:").unwrap();
/// assert_eq!(drive.letter(), 'c');
/// assert_eq!(drive.to_string(), "c:");
///
/// assert!(DriveLetter::parse("C:foo").is_none());
/// assert!(DriveLetter::parse("1:").is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DriveLetter(char);

impl DriveLetter {
    /// Parse a drive letter from a single path segment.
    ///
    /// Returns `None` unless the segment is exactly `[A-Za-z]:`.
    #[must_use]
    pub fn parse(segment: &str) -> Option<Self> {
        match segment.as_bytes() {
            [letter, b':'] if letter.is_ascii_alphabetic() => Some(Self(char::from(*letter))),
            _ => None,
        }
    }

    /// Returns true if `path` begins with a drive letter that is followed by
    /// the end of the string or a separator.
    #[must_use]
    pub fn is_prefix_of(path: &str) -> bool {
        match path.as_bytes() {
            [letter, b':'] => letter.is_ascii_alphabetic(),
            [letter, b':', next, ..] => {
                letter.is_ascii_alphabetic() && (*next == b'/' || *next == b'\\')
            }
            _ => false,
        }
    }

    /// The letter itself, in its original case.
    #[must_use]
    pub const fn letter(self) -> char {
        self.0
    }
}

impl fmt::Display for DriveLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.0)
    }
}
