//! ARIMA (AutoRegressive Integrated Moving Average) implementation
//!
//! The model combines three components:
//!
//! - **AR (AutoRegressive)**: Uses past values to predict future values
//! - **I (Integrated)**: Differencing to achieve stationarity
//! - **MA (Moving Average)**: Uses past forecast errors
//!
//! AR coefficients are the Yule-Walker estimates obtained with the
//! Levinson-Durbin recursion on biased sample autocovariances of the
//! differenced, mean-centred series. The mean of the differenced series is
//! the model constant (drift). Fitting is fully deterministic.
//!
//! ## Example
//!
//! ```rust
//! use forecast_core::{Arima, ArimaOrder, Predictor};
//!
//! let data: Vec<f64> = (1..=20).map(|x| x as f64 + (x as f64).cos()).collect();
//! let mut model = Arima::new(ArimaOrder::new(1, 1, 0).unwrap());
//! model.fit(&data).unwrap();
//! let forecast = model.predict(3).unwrap();
//! assert_eq!(forecast.len(), 3);
//! ```

use forecast_spi::{ArimaOrder, ForecastError, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::Predictor;

/// Relative floor under which an autocovariance counts as zero.
const SINGULAR_TOLERANCE: f64 = 1e-12;

/// ARIMA model for time series forecasting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Arima {
    order: ArimaOrder,
    /// AR coefficients, lag 1 first
    ar_coeffs: Vec<f64>,
    /// MA coefficients, lag 1 first
    ma_coeffs: Vec<f64>,
    /// Mean of the differenced series
    constant: f64,
    /// Last value of each differencing level 0..d (for integration)
    level_tails: Vec<f64>,
    /// Differenced data
    differenced_data: Vec<f64>,
    /// Residuals from fitting
    residuals: Vec<f64>,
    fitted: bool,
}

impl Arima {
    /// Create a new unfitted model of the given order.
    pub fn new(order: ArimaOrder) -> Self {
        Self {
            order,
            ar_coeffs: vec![0.0; order.p],
            ma_coeffs: vec![0.0; order.q],
            constant: 0.0,
            level_tails: Vec::new(),
            differenced_data: Vec::new(),
            residuals: Vec::new(),
            fitted: false,
        }
    }

    /// Apply first differences `order` times
    fn difference(data: &[f64], order: usize) -> Vec<f64> {
        let mut result = data.to_vec();
        for _ in 0..order {
            result = result.windows(2).map(|w| w[1] - w[0]).collect();
        }
        result
    }

    /// Integrate forecasts back to the original scale, innermost level first
    fn undifference(&self, forecasts: &[f64]) -> Vec<f64> {
        let mut result = forecasts.to_vec();
        for &last in self.level_tails.iter().rev() {
            let mut acc = last;
            for value in result.iter_mut() {
                acc += *value;
                *value = acc;
            }
        }
        result
    }

    /// Biased sample autocovariances of `centered` for lags 0..=max_lag
    fn autocovariances(centered: &[f64], max_lag: usize) -> Vec<f64> {
        let n = centered.len();
        (0..=max_lag)
            .map(|k| {
                let sum: f64 = (k..n).map(|i| centered[i] * centered[i - k]).sum();
                sum / n as f64
            })
            .collect()
    }

    /// Estimate AR coefficients using Yule-Walker equations
    fn estimate_ar_coefficients(&self, centered: &[f64], scale: f64) -> Result<Vec<f64>> {
        let p = self.order.p;
        if p == 0 {
            return Ok(Vec::new());
        }

        let autocov = Self::autocovariances(centered, p);
        if !(autocov[0] > SINGULAR_TOLERANCE * scale) {
            return Err(ForecastError::Singular(
                "differenced series has zero variance".to_string(),
            ));
        }

        // Levinson-Durbin
        let mut coeffs = vec![0.0; p];
        let mut error = autocov[0];
        for k in 0..p {
            let mut acc = autocov[k + 1];
            for j in 0..k {
                acc -= coeffs[j] * autocov[k - j];
            }
            let reflection = acc / error;

            let previous = coeffs.clone();
            coeffs[k] = reflection;
            for j in 0..k {
                coeffs[j] = previous[j] - reflection * previous[k - 1 - j];
            }

            error *= 1.0 - reflection * reflection;
            if !(error > SINGULAR_TOLERANCE * autocov[0]) {
                return Err(ForecastError::Singular(format!(
                    "prediction error vanished at lag {}",
                    k + 1
                )));
            }
        }

        Ok(coeffs)
    }

    /// Estimate MA coefficients from residuals
    fn estimate_ma_coefficients(&self, residuals: &[f64]) -> Vec<f64> {
        let q = self.order.q;
        if q == 0 || residuals.is_empty() {
            return vec![0.0; q];
        }

        let n = residuals.len();
        let mean: f64 = residuals.iter().sum::<f64>() / n as f64;
        let centered: Vec<f64> = residuals.iter().map(|x| x - mean).collect();
        let autocov = Self::autocovariances(&centered, q);

        if autocov[0].abs() <= SINGULAR_TOLERANCE {
            return vec![0.0; q];
        }

        // Bounded for invertibility
        autocov[1..]
            .iter()
            .map(|c| (c / autocov[0]).clamp(-0.99, 0.99))
            .collect()
    }

    /// One-step prediction on the differenced scale given history
    fn step(&self, history: &[f64], residuals: &[f64]) -> f64 {
        let mut prediction = self.constant;
        for (j, coeff) in self.ar_coeffs.iter().enumerate() {
            if let Some(idx) = history.len().checked_sub(j + 1) {
                prediction += coeff * (history[idx] - self.constant);
            }
        }
        for (j, coeff) in self.ma_coeffs.iter().enumerate() {
            if let Some(idx) = residuals.len().checked_sub(j + 1) {
                prediction += coeff * residuals[idx];
            }
        }
        prediction
    }

    pub fn order(&self) -> ArimaOrder {
        self.order
    }

    /// Get AR coefficients
    pub fn ar_coefficients(&self) -> &[f64] {
        &self.ar_coeffs
    }

    /// Get MA coefficients
    pub fn ma_coefficients(&self) -> &[f64] {
        &self.ma_coeffs
    }

    /// Drift term on the differenced scale
    pub fn constant(&self) -> f64 {
        self.constant
    }

    /// In-sample one-step residuals on the differenced scale
    pub fn residuals(&self) -> &[f64] {
        &self.residuals
    }
}

impl Predictor for Arima {
    fn fit(&mut self, data: &[f64]) -> Result<()> {
        self.fitted = false;

        let min_required = self.order.min_observations();
        if data.len() < min_required {
            return Err(ForecastError::InsufficientData {
                required: min_required,
                actual: data.len(),
            });
        }

        if data.iter().any(|x| !x.is_finite()) {
            return Err(ForecastError::InvalidData(
                "Data contains NaN or infinite values".to_string(),
            ));
        }

        let d = self.order.d;
        self.level_tails = (0..d)
            .map(|level| {
                let series = Self::difference(data, level);
                series[series.len() - 1]
            })
            .collect();
        self.differenced_data = Self::difference(data, d);

        let n = self.differenced_data.len();
        let mean = self.differenced_data.iter().sum::<f64>() / n as f64;
        let scale = self.differenced_data.iter().map(|x| x * x).sum::<f64>() / n as f64;
        let centered: Vec<f64> = self.differenced_data.iter().map(|x| x - mean).collect();

        self.constant = mean;
        self.ar_coeffs = self.estimate_ar_coefficients(&centered, scale)?;
        self.ma_coeffs = vec![0.0; self.order.q];

        // Conditional residuals; the first p values have no full lag window
        let p = self.order.p;
        self.residuals = vec![0.0; n];
        for i in p..n {
            let prediction = self.step(&self.differenced_data[..i], &[]);
            self.residuals[i] = self.differenced_data[i] - prediction;
        }

        self.ma_coeffs = self.estimate_ma_coefficients(&self.residuals[p..]);

        debug!(
            order = %self.order,
            points = data.len(),
            constant = self.constant,
            ar = ?self.ar_coeffs,
            "fitted ARIMA"
        );

        self.fitted = true;
        Ok(())
    }

    fn predict(&self, steps: usize) -> Result<Vec<f64>> {
        if !self.fitted {
            return Err(ForecastError::NotFitted);
        }

        if steps == 0 {
            return Ok(Vec::new());
        }

        let n = self.differenced_data.len();
        let mut extended = self.differenced_data.clone();
        let mut extended_residuals = self.residuals.clone();

        for _ in 0..steps {
            let forecast = self.step(&extended, &extended_residuals);
            extended.push(forecast);
            extended_residuals.push(0.0); // Future residuals are 0
        }

        let forecasts = self.undifference(&extended[n..]);
        if forecasts.iter().any(|x| !x.is_finite()) {
            return Err(ForecastError::NumericalError(
                "forecast diverged to a non-finite value".to_string(),
            ));
        }
        Ok(forecasts)
    }

    fn is_fitted(&self) -> bool {
        self.fitted
    }
}
