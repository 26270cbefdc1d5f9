//! Data error types.

use thiserror::Error;

/// Data source errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataError {
    /// HTTP request failed before a response was received
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Server answered with a non-success status
    #[error("HTTP {status} from {url}")]
    HttpStatus { status: u16, url: String },

    /// Failed to parse response
    #[error("Parse error: {0}")]
    ParseError(String),

    /// No data returned
    #[error("No data returned")]
    NoData,

    /// A record arrived without the value it is supposed to carry
    #[error("Missing value at {0}")]
    MissingValue(String),

    /// Value is NaN or infinite
    #[error("Invalid value at {at}: {value}")]
    InvalidValue { at: String, value: f64 },

    /// Two observations share a date
    #[error("Duplicate timestamp: {0}")]
    DuplicateTimestamp(String),

    /// Symbol is empty or malformed
    #[error("Invalid symbol: {0:?}")]
    InvalidSymbol(String),

    /// API error from data provider
    #[error("API error: {0}")]
    ApiError(String),

    /// Required credential is not configured
    #[error("Missing credential: {0}")]
    MissingCredential(&'static str),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for data operations.
pub type Result<T> = std::result::Result<T, DataError>;
