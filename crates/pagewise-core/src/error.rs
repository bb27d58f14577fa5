//! Error types for pager construction and configuration loading.

use std::path::PathBuf;

use thiserror::Error;

use crate::validate::ValidationErrors;

/// Errors that can occur while configuring a pager.
///
/// Out-of-range page requests are not errors; the pager ignores them.
#[derive(Debug, Error)]
pub enum PagerError {
    /// One or more configuration rules were violated.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ValidationErrors),

    /// Configuration file could not be read.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML for a pager config.
    #[error("Failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

impl PagerError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Access the individual violations, if this is a validation failure.
    pub fn violations(&self) -> Option<&ValidationErrors> {
        match self {
            Self::InvalidConfig(errors) => Some(errors),
            _ => None,
        }
    }
}
