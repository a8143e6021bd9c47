//! Errors that can arise while rendering a directory tree.
//!
//! There is only one failure mode: a directory could not be listed. It wraps the underlying
//! `std::io::Error` together with the path that failed, and is never recovered from.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Provide an enum for all possible errors that might arise in this program.
#[derive(Debug, Error)]
pub enum TreeError {
    /// Listing a directory failed: missing path, not a directory, permission denied, ...
    #[error("cannot read directory '{}': {}", path.display(), source)]
    Read {
        /// The path that could not be listed or inspected
        path: PathBuf,
        /// The error reported by the filesystem
        #[source]
        source: io::Error,
    },
}

impl TreeError {
    /// Wrap an `io::Error` raised while reading `path`.
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> TreeError {
        TreeError::Read {
            path: path.into(),
            source,
        }
    }

    /// Kind of the underlying IO failure.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            TreeError::Read { source, .. } => source.kind(),
        }
    }
}

/// Result type alias used throughout the crate
pub type Result<T> = std::result::Result<T, TreeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// Verify that the message names the path and the io cause.
    fn test_read_error_display() {
        let err = TreeError::read(
            "/no/such/dir",
            io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/no/such/dir"));
        assert!(msg.contains("No such file or directory"));
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    /// Verify that the io error stays reachable as the error source.
    fn test_read_error_source() {
        use std::error::Error as _;

        let err = TreeError::read(
            "locked",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        let source = err.source().expect("io error as source");
        assert_eq!(source.to_string(), "denied");
    }
}
