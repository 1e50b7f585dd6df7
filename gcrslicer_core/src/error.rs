//! Error types for the GCR Slicer core library
//!
//! Only conditions the caller must act on surface as errors. Everything the
//! resolver can recover from locally (missing inputs, unreadable
//! subdirectories, filtered files) is logged and skipped instead.

use thiserror::Error;

pub mod io;
pub mod validation;

pub use self::io::{IoError, IoErrorKind};
pub use self::validation::ValidationError;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the GCR Slicer core library
///
/// Errors are categorized into two types:
/// - I/O errors: the environment could not be inspected (e.g. no current directory)
/// - Validation errors: fatal precondition violations found while resolving
#[derive(Error, Debug)]
pub enum Error {
    /// I/O related errors
    #[error(transparent)]
    Io(#[from] IoError),

    /// Validation related errors
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl Error {
    /// Whether this error ended an iteration early
    ///
    /// A fatal error is reported once by the resolver, after which every pull
    /// signals end-of-sequence.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Self::Io(IoError::from_std(source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as StdError;
    use std::io;
    use std::path::Path;

    #[test]
    fn test_unrecognized_entry_is_fatal() {
        let error = Error::from(ValidationError::unrecognized_entry(Path::new("/dev/null")));

        assert!(error.is_fatal());
        assert!(error.to_string().contains("/dev/null"));
    }

    #[test]
    fn test_outside_root_is_fatal() {
        let error = Error::from(ValidationError::outside_root(
            Path::new("/elsewhere/audio"),
            Path::new("/music"),
        ));

        match &error {
            Error::Validation(ValidationError::OutsideRoot { path, root }) => {
                assert_eq!(path, Path::new("/elsewhere/audio"));
                assert_eq!(root, Path::new("/music"));
            }
            _ => panic!("Expected Validation::OutsideRoot error"),
        }
        assert!(error.is_fatal());
    }

    #[test]
    fn test_std_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "cwd removed");
        let error: Error = io_error.into();

        match &error {
            Error::Io(io_err) => assert_eq!(io_err.kind, IoErrorKind::FileNotFound),
            _ => panic!("Expected Io error"),
        }
        assert!(!error.is_fatal());
        assert!(error.source().is_some());
    }
}
