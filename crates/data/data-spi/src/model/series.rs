//! Validated, chronologically ordered time series.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Observation;
use crate::error::{DataError, Result};

/// An ordered sequence of observations.
///
/// Construction sorts observations by date and rejects duplicate dates and
/// non-finite values, so every `TimeSeries` in circulation is strictly
/// increasing in time and contains only finite values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    name: String,
    observations: Vec<Observation>,
}

impl TimeSeries {
    /// Build a series from observations in any order.
    pub fn new(name: impl Into<String>, mut observations: Vec<Observation>) -> Result<Self> {
        if let Some(bad) = observations.iter().find(|o| !o.value.is_finite()) {
            return Err(DataError::InvalidValue {
                at: bad.date.to_string(),
                value: bad.value,
            });
        }

        observations.sort_by_key(|o| o.date);

        if let Some(dup) = observations.windows(2).find(|w| w[0].date == w[1].date) {
            return Err(DataError::DuplicateTimestamp(dup[0].date.to_string()));
        }

        Ok(Self {
            name: name.into(),
            observations,
        })
    }

    /// Series label, e.g. `AAPL close` or `CPIAUCSL`.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Values in chronological order.
    pub fn values(&self) -> Vec<f64> {
        self.observations.iter().map(|o| o.value).collect()
    }

    /// Dates in chronological order.
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.observations.iter().map(|o| o.date).collect()
    }

    pub fn first(&self) -> Option<&Observation> {
        self.observations.first()
    }

    pub fn last(&self) -> Option<&Observation> {
        self.observations.last()
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Summary statistics over the values.
    pub fn stats(&self) -> SeriesStats {
        SeriesStats::calculate(&self.values())
    }
}

/// Statistics for time series data.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SeriesStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub std: f64,
    pub count: usize,
}

impl SeriesStats {
    pub fn calculate(data: &[f64]) -> Self {
        if data.is_empty() {
            return Self::default();
        }

        let count = data.len();
        let min = data.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = data.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let mean = data.iter().sum::<f64>() / count as f64;
        let variance = data.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / count as f64;

        Self {
            min,
            max,
            mean,
            std: variance.sqrt(),
            count,
        }
    }
}
