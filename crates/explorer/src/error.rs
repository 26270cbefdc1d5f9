//! Service error type

use data_facade::DataError;
use forecast_facade::ForecastError;
use llm_facade::LlmError;
use thiserror::Error;

/// Why a dashboard section could not be produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExplorerError {
    #[error(transparent)]
    Data(#[from] DataError),

    #[error(transparent)]
    Forecast(#[from] ForecastError),

    #[error(transparent)]
    Llm(#[from] LlmError),

    /// A section depends on another section that failed
    #[error("{0}")]
    Unavailable(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ExplorerError>;
