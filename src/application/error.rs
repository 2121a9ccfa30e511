//! Application-level errors (wraps domain errors)

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::DomainError;

/// Application errors wrap domain errors and add application-level context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Roster file absent. Expected on first run; the session recovers by
    /// starting a fresh list.
    #[error("no roster file at: {0}")]
    RosterNotFound(PathBuf),

    /// Roster file exists but cannot be decoded. Surfaced distinctly from
    /// "missing" and treated as fatal.
    #[error("roster file is corrupt: {path}: {message}")]
    CorruptRoster { path: PathBuf, message: String },

    #[error("config error: {message}")]
    Config { message: String },

    #[error("operation failed: {context}")]
    OperationFailed {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
