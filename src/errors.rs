//! Defines application-specific error types.
//!
//! This module provides the `Error` enum, which categorizes the errors that
//! can occur during execution, offering more context than generic I/O or
//! `anyhow` errors.

use thiserror::Error;

/// Application-specific errors used throughout `selcat`.
#[derive(Error, Debug)]
pub enum Error {
    /// Error occurring during file or directory access (read, metadata).
    #[error("I/O error accessing path '{path}': {source}")]
    Io {
        /// The path that caused the I/O error.
        path: String, // Use String to avoid lifetime issues if PathBuf is dropped
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// A selection entry that does not exist or could not be resolved.
    #[error("Invalid selection: {0}")]
    Config(String),

    /// Error related to clipboard operations (copying).
    #[error("Clipboard error: {0}")]
    Clipboard(String), // arboard errors are stringified at the boundary
}

/// Convenience alias used by the library pipeline.
pub type Result<T> = std::result::Result<T, Error>;

/// Helper to create an [`Error::Io`] with path context.
pub fn io_error_with_path<P: AsRef<std::path::Path>>(source: std::io::Error, path: P) -> Error {
    Error::Io {
        path: path.as_ref().display().to_string(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{io, path::PathBuf};

    #[test]
    fn test_io_error_with_path_helper() {
        let path = PathBuf::from("some/test/path.txt");
        let source_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let app_error = io_error_with_path(source_error, &path);

        match app_error {
            Error::Io {
                path: error_path,
                source,
            } => {
                assert!(error_path.contains("some/test/path.txt"));
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            _ => panic!("Expected Error::Io"),
        }
    }

    #[test]
    fn test_error_display() {
        let err = Error::Clipboard("no display server".to_string());
        assert_eq!(err.to_string(), "Clipboard error: no display server");

        let err = Error::Config("path does not exist".to_string());
        assert_eq!(err.to_string(), "Invalid selection: path does not exist");
    }
}
