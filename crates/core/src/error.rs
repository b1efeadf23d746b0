//! Error types for the rigging-core crate

use miette::Diagnostic;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for rigging-core operations
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    /// Tool manifest could not be parsed
    #[error("Malformed tool manifest at {}: {message}", path.display())]
    #[diagnostic(code(rigging_core::tools::manifest))]
    Manifest {
        /// Location of the manifest file
        path: Box<Path>,
        /// Parser message describing what was wrong
        message: String,
    },

    /// I/O error with path context
    #[error("I/O error during {operation}: {source}")]
    #[diagnostic(code(rigging_core::io::error))]
    Io {
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
        /// The path where the I/O error occurred, if applicable
        path: Option<Box<Path>>,
        /// Description of the operation that failed
        operation: String,
    },

    /// Glob pattern could not be compiled
    #[error("Invalid glob pattern '{pattern}': {message}")]
    #[diagnostic(code(rigging_core::paths::pattern))]
    Pattern {
        /// The offending pattern
        pattern: String,
        /// Parser message describing what was wrong
        message: String,
    },
}

impl Error {
    /// Create a manifest error with path context
    pub fn manifest(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Manifest {
            path: path.into().into_boxed_path(),
            message: message.into(),
        }
    }

    /// Create an I/O error with context
    pub fn io(source: std::io::Error, path: Option<PathBuf>, operation: impl Into<String>) -> Self {
        Self::Io {
            source,
            path: path.map(std::path::PathBuf::into_boxed_path),
            operation: operation.into(),
        }
    }

    /// Create a pattern error
    pub fn pattern(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Pattern {
            pattern: pattern.into(),
            message: message.into(),
        }
    }
}

/// Result type for rigging-core operations
pub type Result<T> = std::result::Result<T, Error>;
