//! Forecast Core
//!
//! ARIMA fitting (differencing, Yule-Walker via Levinson-Durbin) and the
//! [`ArimaForecaster`] implementation of the [`Forecaster`] contract.
//!
//! ## Example
//!
//! ```rust
//! use forecast_core::{ArimaForecaster, Forecaster, FORECAST_HORIZON};
//!
//! let data: Vec<f64> = (0..40)
//!     .map(|x| 100.0 + x as f64 + ((x * x) % 7) as f64 * 0.3)
//!     .collect();
//! let forecast = ArimaForecaster::default().forecast(&data, FORECAST_HORIZON).unwrap();
//! assert_eq!(forecast.len(), 30);
//! ```

pub mod arima;
pub mod forecaster;

// Re-export SPI types for implementations
pub use forecast_spi::{ArimaOrder, Forecast, ForecastError, Forecaster, Result, FORECAST_HORIZON};

pub use arima::Arima;
pub use forecaster::ArimaForecaster;

/// Common trait for fitted time series models
pub trait Predictor {
    /// Fit the model to historical data
    fn fit(&mut self, data: &[f64]) -> Result<()>;

    /// Predict future values
    fn predict(&self, steps: usize) -> Result<Vec<f64>>;

    /// Check if the model has been fitted
    fn is_fitted(&self) -> bool;
}
