//! Error types for the rigging-github crate

use miette::Diagnostic;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for rigging-github operations
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    /// A previously emitted workflow file exists but cannot be parsed
    #[error("Unparseable prior workflow at {}: {message}", path.display())]
    #[diagnostic(code(rigging_github::pins::prior_workflow))]
    PriorWorkflow {
        /// Location of the prior workflow file
        path: Box<Path>,
        /// Parser message describing what was wrong
        message: String,
    },

    /// I/O error with path context
    #[error("I/O error during {operation}: {source}")]
    #[diagnostic(code(rigging_github::io::error))]
    Io {
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
        /// The path where the I/O error occurred, if applicable
        path: Option<Box<Path>>,
        /// Description of the operation that failed
        operation: String,
    },

    /// Error raised by a core helper
    #[error(transparent)]
    #[diagnostic(transparent)]
    Core(#[from] rigging_core::Error),
}

impl Error {
    /// Create a prior-workflow parse error
    pub fn prior_workflow(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::PriorWorkflow {
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
}

/// Result type for rigging-github operations
pub type Result<T> = std::result::Result<T, Error>;
