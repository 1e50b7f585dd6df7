//! Extension filtering for resolved file paths
//!
//! The filter is a case-insensitive suffix allow-list applied to file names.
//! It never affects directory traversal, only which files are yielded, and it
//! can be used on its own over any stream of resolved paths.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Case-insensitive suffix allow-list
///
/// An empty filter accepts every file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionFilter {
    /// Normalized suffixes: trimmed and lowercase
    suffixes: Vec<String>,
}

impl ExtensionFilter {
    /// Create a filter from suffixes such as `.wav`, `.WAV` or `tar.xz`
    ///
    /// Entries are matched literally against the end of file names: `gps`
    /// accepts `x.gps` as well as `xgps`. They are trimmed and lowercased,
    /// and empty or duplicate entries are dropped.
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut suffixes: Vec<String> = Vec::new();

        for extension in extensions {
            let suffix = extension.as_ref().trim().to_lowercase();
            if !suffix.is_empty() && !suffixes.contains(&suffix) {
                suffixes.push(suffix);
            }
        }

        Self { suffixes }
    }

    /// Check a file name against the filter
    pub fn accepts_name(&self, name: &OsStr) -> bool {
        if self.suffixes.is_empty() {
            return true;
        }

        let name = name.to_string_lossy().to_lowercase();
        self.suffixes
            .iter()
            .any(|suffix| name.ends_with(suffix.as_str()))
    }

    /// Check the file name of a path against the filter
    ///
    /// Paths without a file name (such as `..`) are only accepted by an
    /// empty filter.
    pub fn accepts(&self, path: &Path) -> bool {
        match path.file_name() {
            Some(name) => self.accepts_name(name),
            None => self.suffixes.is_empty(),
        }
    }

    /// Whether the filter accepts everything
    pub fn is_empty(&self) -> bool {
        self.suffixes.is_empty()
    }

    /// Normalized suffixes
    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }
}

/// Iterator adaptor that drops resolved paths rejected by an [`ExtensionFilter`]
///
/// Errors are passed through untouched.
pub struct ExtensionFiltered<I> {
    inner: I,
    filter: ExtensionFilter,
}

impl<I, E> Iterator for ExtensionFiltered<I>
where
    I: Iterator<Item = Result<PathBuf, E>>,
{
    type Item = Result<PathBuf, E>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.inner.next()? {
                Ok(path) if !self.filter.accepts(&path) => {
                    log::trace!("Filtered out {}", path.display());
                    continue;
                }
                item => return Some(item),
            }
        }
    }
}

/// Compose an [`ExtensionFilter`] over a stream of resolved paths
pub trait FilterExtensions<E>: Iterator<Item = Result<PathBuf, E>> + Sized {
    /// Keep only paths accepted by `filter`
    fn filter_extensions(self, filter: ExtensionFilter) -> ExtensionFiltered<Self> {
        ExtensionFiltered {
            inner: self,
            filter,
        }
    }
}

impl<I, E> FilterExtensions<E> for I where I: Iterator<Item = Result<PathBuf, E>> {}
