//! Trait for univariate forecasters

use crate::error::Result;
use crate::model::Forecast;

/// Fits a model to a series and projects it forward.
///
/// Implementations must not mutate the input and must return either exactly
/// `horizon` finite values or an error; partial forecasts are never produced.
pub trait Forecaster {
    /// Model name for display
    fn name(&self) -> String;

    /// Fit to `data` (oldest first) and forecast `horizon` steps ahead
    fn forecast(&self, data: &[f64], horizon: usize) -> Result<Forecast>;
}
