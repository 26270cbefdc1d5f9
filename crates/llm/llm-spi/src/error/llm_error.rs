//! Language model error types.

use thiserror::Error;

/// Completion errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LlmError {
    /// Required credential is not configured
    #[error("Missing credential: {0}")]
    MissingCredential(&'static str),

    /// HTTP request failed before a response was received
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Service answered with an error
    #[error("API error [{status}]: {message}")]
    ApiError { status: u16, message: String },

    /// Failed to parse response
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Response carried no completion text
    #[error("Empty response")]
    EmptyResponse,

    /// Prompt is blank
    #[error("Prompt is empty")]
    EmptyPrompt,

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for completion operations.
pub type Result<T> = std::result::Result<T, LlmError>;
