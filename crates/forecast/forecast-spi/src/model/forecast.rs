//! Point forecast result

use serde::{Deserialize, Serialize};

use super::ArimaOrder;

/// Number of future steps the dashboard forecasts.
pub const FORECAST_HORIZON: usize = 30;

/// Ordered point predictions, one per future step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    /// Order of the model that produced the values
    pub order: ArimaOrder,
    /// Predictions for steps 1..=horizon
    pub values: Vec<f64>,
}

impl Forecast {
    pub fn new(order: ArimaOrder, values: Vec<f64>) -> Self {
        Self { order, values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Prediction for the final step
    pub fn last(&self) -> Option<f64> {
        self.values.last().copied()
    }
}
