//! Forecast Service Provider Interface
//!
//! Defines the forecaster contract, its result model and error type.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::Forecaster;
pub use error::{ForecastError, Result};
pub use model::{ArimaOrder, Forecast, FORECAST_HORIZON};
