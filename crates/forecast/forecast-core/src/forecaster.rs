//! ARIMA-backed [`Forecaster`].

use forecast_spi::{ArimaOrder, Forecast, Forecaster, Result};
use tracing::debug;

use crate::{Arima, Predictor};

/// Fits a fresh [`Arima`] of a fixed order on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArimaForecaster {
    order: ArimaOrder,
}

impl ArimaForecaster {
    pub fn new(order: ArimaOrder) -> Self {
        Self { order }
    }

    pub fn order(&self) -> ArimaOrder {
        self.order
    }
}

impl Forecaster for ArimaForecaster {
    fn name(&self) -> String {
        self.order.to_string()
    }

    fn forecast(&self, data: &[f64], horizon: usize) -> Result<Forecast> {
        let mut model = Arima::new(self.order);
        model.fit(data)?;
        let values = model.predict(horizon)?;
        debug!(order = %self.order, horizon, "forecast ready");
        Ok(Forecast::new(self.order, values))
    }
}
