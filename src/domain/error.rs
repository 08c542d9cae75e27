use std::io;

use thiserror::Error;

/// Library-wide error type for branch-sweep operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// A required input was not supplied.
    #[error("Input required and not supplied: {0}")]
    MissingInput(String),

    /// An input was supplied but could not be parsed.
    #[error("Invalid value for input '{name}': {reason}")]
    InvalidInput { name: String, reason: String },

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Invocation context (repository, event payload) could not be resolved.
    #[error("Invocation context unavailable: {0}")]
    Context(String),

    /// The GitHub API answered with a non-success status.
    #[error("{message} (HTTP {status})")]
    GitHubApi { status: u16, message: String },

    /// Transport-level HTTP failure.
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn invalid_input(name: impl Into<String>, reason: impl Into<String>) -> Self {
        AppError::InvalidInput { name: name.into(), reason: reason.into() }
    }
}
