//! Validation related error types

use std::path::PathBuf;
use thiserror::Error;

/// Fatal precondition violations detected during path resolution
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Input exists but is neither a regular file nor a directory
    #[error("Unrecognized filesystem entry (not a file or directory): {path}")]
    UnrecognizedEntry { path: PathBuf },

    /// Discovered path does not live under the configured root directory
    #[error("Path {path} is outside the root directory {root}")]
    OutsideRoot { path: PathBuf, root: PathBuf },
}

impl ValidationError {
    /// Create an unrecognized entry error
    pub fn unrecognized_entry(path: &std::path::Path) -> Self {
        Self::UnrecognizedEntry {
            path: path.to_path_buf(),
        }
    }

    /// Create an outside root error
    pub fn outside_root(path: &std::path::Path, root: &std::path::Path) -> Self {
        Self::OutsideRoot {
            path: path.to_path_buf(),
            root: root.to_path_buf(),
        }
    }

    /// Path the error was raised for
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::UnrecognizedEntry { path } | Self::OutsideRoot { path, .. } => path,
        }
    }
}
