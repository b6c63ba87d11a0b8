//! Error types and handling for globcp
//!
//! Every failure surfaces through [`Error`]; nothing is retried or swallowed.
//! [`ErrorKind`] gives callers a coarse category to match on without caring
//! about the individual variants.

use std::path::{Path, PathBuf};

/// Main error type for globcp operations
#[derive(thiserror::Error, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Error {
    /// The invocation itself was malformed
    #[error("invalid arguments: {message}")]
    InvalidArguments {
        /// Description of what was missing or malformed
        message: String,
    },

    /// Glob compilation or expansion failed
    #[error("glob expansion failed: {message}")]
    Glob {
        /// Error message from the glob engine
        message: String,
    },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        /// Error message from the I/O operation
        message: String,
    },

    /// Source file not found
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path to the file that was not found
        path: PathBuf,
    },

    /// Permission denied
    #[error("permission denied: {path}")]
    PermissionDenied {
        /// Path to the file with permission issues
        path: PathBuf,
    },

    /// Generic error with custom message
    #[error("{message}")]
    Other {
        /// Custom error message
        message: String,
    },
}

/// Error kind for categorizing errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The invocation was malformed
    InvalidArguments,
    /// Glob compilation or expansion errors
    Glob,
    /// I/O related errors
    Io,
    /// Other errors
    Other,
}

impl Error {
    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArguments { .. } => ErrorKind::InvalidArguments,
            Self::Glob { .. } => ErrorKind::Glob,
            Self::Io { .. } | Self::FileNotFound { .. } | Self::PermissionDenied { .. } => {
                ErrorKind::Io
            }
            Self::Other { .. } => ErrorKind::Other,
        }
    }

    /// Create a new invalid-arguments error
    pub fn invalid_arguments<S: Into<String>>(message: S) -> Self {
        Self::InvalidArguments {
            message: message.into(),
        }
    }

    /// Create a new glob-expansion error
    pub fn glob<S: Into<String>>(message: S) -> Self {
        Self::Glob {
            message: message.into(),
        }
    }

    /// Create a new generic error
    pub fn other<S: Into<String>>(message: S) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Convert an I/O error that occurred while operating on `path`
    ///
    /// Not-found and permission-denied conditions keep the offending path as
    /// structured data; everything else folds into [`Error::Io`] with the
    /// path in the message.
    pub fn from_io_path(error: std::io::Error, path: &Path) -> Self {
        match error.kind() {
            std::io::ErrorKind::NotFound => Self::FileNotFound {
                path: path.to_path_buf(),
            },
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied {
                path: path.to_path_buf(),
            },
            _ => Self::Io {
                message: format!("{}: {}", path.display(), error),
            },
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: error.to_string(),
        }
    }
}
