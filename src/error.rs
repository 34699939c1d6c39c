//! Error handling for dsstne.
//!
//! Every failure falls into one of two kinds: a bad configuration value
//! (`ErrorKind::Validation`) or a network file that could not be read or
//! understood (`ErrorKind::Io`).

use std::path::PathBuf;

use thiserror::Error;

use crate::layers::kind::LayerKind;

/// Result type alias for dsstne operations
pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Io,
}

#[derive(Error, Debug)]
pub enum Error {
    // Configuration
    #[error("Invalid configuration: {field} {reason}")]
    Validation { field: &'static str, reason: String },

    // Network file
    #[error("Network file not found: {}", path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse network file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize network file {}: {source}", path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid network '{name}': {reason}")]
    InvalidNetwork { name: String, reason: String },

    #[error("No layers of type {kind} found in network: {network}")]
    NoLayers { kind: LayerKind, network: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Validation { .. } => ErrorKind::Validation,
            Error::FileNotFound { .. }
            | Error::Parse { .. }
            | Error::Serialize { .. }
            | Error::InvalidNetwork { .. }
            | Error::NoLayers { .. }
            | Error::Io(_) => ErrorKind::Io,
        }
    }

    /// Stable identifier for this error, suitable for scripts and logs.
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::Validation { .. } => "VALIDATION_ERROR",
            Error::FileNotFound { .. } => "FILE_NOT_FOUND",
            Error::Parse { .. } => "PARSE_ERROR",
            Error::Serialize { .. } => "SERIALIZE_ERROR",
            Error::InvalidNetwork { .. } => "INVALID_NETWORK",
            Error::NoLayers { .. } => "NO_LAYERS",
            Error::Io(_) => "IO_ERROR",
        }
    }

    pub(crate) fn invalid(name: &str, reason: impl Into<String>) -> Error {
        Error::InvalidNetwork { name: name.to_string(), reason: reason.into() }
    }
}
