//! Shared error types for the library

use std::path::PathBuf;
use thiserror::Error;

use crate::context::ContextError;

/// Main error type for propinfer operations
#[derive(Debug, Error)]
pub enum Error {
    /// File system related errors
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Source files the translator could not parse
    #[error("Parse error in {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Context(#[from] ContextError),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
