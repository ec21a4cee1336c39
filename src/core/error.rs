//! Error types for the logger facade

use super::escalation::Escalation;

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An option handed to a logger builder was rejected
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Error produced by `error_return`, carrying the same text that was logged
    #[error("{0}")]
    Reported(String),

    /// Caller-requested escalation that was propagated instead of executed
    #[error(transparent)]
    Escalation(#[from] Escalation),
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Text of an error returned by `error_return`, if this is one
    pub fn reported_text(&self) -> Option<&str> {
        match self {
            LoggerError::Reported(text) => Some(text),
            _ => None,
        }
    }
}
