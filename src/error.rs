//! Application error types.
//!
//! Every failure in a run is fatal: input, output and configuration errors
//! all abort the batch with enough context to find the offending file.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Application result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types with specific context for actionable debugging
#[derive(Debug, Error)]
pub enum Error {
    /// IO error with path context
    ///
    /// `fs-err` sources already name their file, so `path` is only displayed
    /// when set explicitly.
    #[error("IO error{}: {source}", display_path(.path.as_deref()))]
    Io {
        /// The underlying IO error.
        source: std::io::Error,
        /// File path where the error occurred, if known.
        path: Option<PathBuf>,
    },

    /// Input could not be decoded into song records
    #[error("Parse error in {file:?}: {message}")]
    Parse {
        /// File that failed to parse, if known.
        file: Option<PathBuf>,
        /// Description of the parse failure.
        message: String,
    },

    /// Output records could not be encoded
    #[error("Serialize error: {message}")]
    Serialize {
        /// Description of the encoding failure.
        message: String,
    },

    /// Configuration error with guidance
    #[error("Configuration error: {message}. {hint}")]
    Config {
        /// Description of the configuration problem.
        message: String,
        /// Actionable guidance for fixing the issue.
        hint: &'static str,
    },
}

impl Error {
    /// Create an IO error with path context
    pub fn io(source: std::io::Error, path: impl Into<Option<PathBuf>>) -> Self {
        Self::Io { source, path: path.into() }
    }

    /// Create a config error with actionable hint
    pub fn config(message: impl Into<String>, hint: &'static str) -> Self {
        Self::Config { message: message.into(), hint }
    }

    /// Create a parse error with file context
    pub fn parse(message: impl Into<String>, file: impl Into<Option<PathBuf>>) -> Self {
        Self::Parse { file: file.into(), message: message.into() }
    }

    /// Create a serialize error
    pub fn serialize(message: impl Into<String>) -> Self {
        Self::Serialize { message: message.into() }
    }
}

fn display_path(path: Option<&Path>) -> String {
    path.map(|p| format!(" at {}", p.display())).unwrap_or_default()
}

// Convenience conversions
impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io { source: e, path: None }
    }
}
