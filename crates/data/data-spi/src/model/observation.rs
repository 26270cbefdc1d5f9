//! Single dated observation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One (date, value) pair of a time series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Observation date
    pub date: NaiveDate,
    /// Observed value
    pub value: f64,
}

impl Observation {
    /// Create a new observation.
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }
}
