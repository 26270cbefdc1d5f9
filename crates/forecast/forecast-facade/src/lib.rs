//! Forecast Facade
//!
//! High-level API for forecasting. Re-exports the public types of the
//! forecast stack and offers [`forecast_trends`], the fixed ARIMA(5,1,0),
//! 30-step forecast the dashboard draws.

// Re-export SPI types
pub use forecast_spi::{ArimaOrder, Forecast, ForecastError, Forecaster, Result, FORECAST_HORIZON};

// Re-export core implementations
pub use forecast_core::{arima, Arima, ArimaForecaster, Predictor};

/// Forecast the next [`FORECAST_HORIZON`] values of `data` with ARIMA(5,1,0).
///
/// Any fitting failure is returned as an error; no fallback order is tried.
pub fn forecast_trends(data: &[f64]) -> Result<Forecast> {
    ArimaForecaster::default().forecast(data, FORECAST_HORIZON)
}
