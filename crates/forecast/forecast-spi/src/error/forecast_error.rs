//! Forecast error types

use thiserror::Error;

/// Result type alias for forecast operations
pub type Result<T> = std::result::Result<T, ForecastError>;

/// Errors that can occur while fitting or forecasting
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// Insufficient data points for the operation
    #[error("Insufficient data: need at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Invalid parameter value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Input contains values the model cannot use
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// The estimation system has no unique solution
    #[error("Singular system: {0}")]
    Singular(String),

    /// Model has not been fitted yet
    #[error("Model must be fitted before prediction")]
    NotFitted,

    /// Numerical computation error
    #[error("Numerical error: {0}")]
    NumericalError(String),
}
