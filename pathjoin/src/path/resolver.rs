//! Path resolution against the current working directory.
//!
//! This module provides the `PathResolver` type, which turns relative paths
//! into absolute ones by joining them onto a working directory. The working
//! directory comes from a [`WorkingDirectory`] source that is consulted on
//! every call.

use std::env;
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::path::absolute::is_absolute;
use crate::path::join::join;

/// A source for the working directory that relative paths resolve against.
pub trait WorkingDirectory {
    /// Return the current working directory as a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be determined.
    fn current_dir(&self) -> Result<String>;
}

/// Reads the working directory of the running process.
///
/// The directory is read fresh on every call, so changes made with
/// [`std::env::set_current_dir`] are always observed.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessWorkingDirectory;

impl WorkingDirectory for ProcessWorkingDirectory {
    fn current_dir(&self) -> Result<String> {
        let cwd = env::current_dir()?;
        cwd.into_os_string()
            .into_string()
            .map_err(|raw| Error::InvalidPath {
                path: PathBuf::from(raw),
                reason: "working directory is not valid UTF-8".to_string(),
            })
    }
}

/// Resolves paths to absolute form.
///
/// Absolute inputs are joined as-is. Relative inputs are joined onto the
/// working directory reported by `W`.
///
/// # Examples
///
/// ```
/// use pathjoin::path::PathResolver;
///
/// let resolver = PathResolver::new();
///
/// assert_eq!(resolver.resolve("/a", &["b/c"]).unwrap(), "/a/b/c");
/// assert_eq!(resolver.resolve("\\a", &["b/c"]).unwrap(), "/a/b/c");
///
/// let relative = resolver.resolve("a", &["b"]).unwrap();
/// assert!(relative.ends_with("a/b"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PathResolver<W = ProcessWorkingDirectory> {
    working_dir: W,
}

impl PathResolver<ProcessWorkingDirectory> {
    /// Create a resolver over the process working directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<W: WorkingDirectory> PathResolver<W> {
    /// Create a resolver over a custom working directory source.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathjoin::path::{PathResolver, WorkingDirectory};
    ///
    /// struct Fixed;
    ///
    /// impl WorkingDirectory for Fixed {
    ///     fn current_dir(&self) -> pathjoin::Result<String> {
    ///         Ok("/srv/app".to_string())
    ///     }
    /// }
    ///
    /// let resolver = PathResolver::with_working_directory(Fixed);
    /// assert_eq!(resolver.resolve("logs", &["../data"]).unwrap(), "/srv/app/data");
    /// ```
    #[must_use]
    pub fn with_working_directory(working_dir: W) -> Self {
        Self { working_dir }
    }

    /// The working directory source used by this resolver.
    #[must_use]
    pub fn working_directory(&self) -> &W {
        &self.working_dir
    }

    /// Resolve `first` and `rest` to a normalized absolute path.
    ///
    /// If `first` is already absolute this is exactly [`join`]. Otherwise the
    /// working directory is read and placed in front of `first`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `first` is empty
    /// - The working directory cannot be read
    /// - The joined path would ascend above a drive root
    pub fn resolve<S: AsRef<str>>(&self, first: &str, rest: &[S]) -> Result<String> {
        if first.is_empty() {
            return Err(Error::InvalidArgument {
                reason: "the first path must not be empty".to_string(),
            });
        }

        if is_absolute(first) {
            return join(first, rest);
        }

        let cwd = self.working_dir.current_dir()?;
        log::debug!("Resolving {first:?} against working directory {cwd:?}");

        let mut paths = Vec::with_capacity(rest.len() + 1);
        paths.push(first);
        paths.extend(rest.iter().map(AsRef::<str>::as_ref));
        join(&cwd, &paths)
    }
}

/// Resolve a path against the process working directory.
///
/// Shorthand for `PathResolver::new().resolve(first, rest)`.
///
/// # Errors
///
/// See [`PathResolver::resolve`].
///
/// # Examples
///
/// ```
/// use pathjoin::path::resolve;
///
/// assert_eq!(resolve("C:\\a", &["b/c"]).unwrap(), "C:/a/b/c");
/// ```
pub fn resolve<S: AsRef<str>>(first: &str, rest: &[S]) -> Result<String> {
    PathResolver::new().resolve(first, rest)
}
