//! ARIMA model order

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ForecastError, Result};

/// Orders of an ARIMA(p, d, q) model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArimaOrder {
    /// Autoregressive lags
    pub p: usize,
    /// Differencing steps
    pub d: usize,
    /// Moving-average terms
    pub q: usize,
}

impl ArimaOrder {
    pub const MAX_P: usize = 10;
    pub const MAX_D: usize = 2;
    pub const MAX_Q: usize = 10;

    /// Create a validated order.
    pub fn new(p: usize, d: usize, q: usize) -> Result<Self> {
        if p > Self::MAX_P {
            return Err(ForecastError::InvalidParameter {
                name: "p".to_string(),
                reason: format!("AR order must be <= {}", Self::MAX_P),
            });
        }
        if d > Self::MAX_D {
            return Err(ForecastError::InvalidParameter {
                name: "d".to_string(),
                reason: format!("Differencing order must be <= {}", Self::MAX_D),
            });
        }
        if q > Self::MAX_Q {
            return Err(ForecastError::InvalidParameter {
                name: "q".to_string(),
                reason: format!("MA order must be <= {}", Self::MAX_Q),
            });
        }
        Ok(Self { p, d, q })
    }

    /// Smallest series length the model can be fitted to.
    ///
    /// The series must be longer than `p + d + q`, so that after differencing
    /// more values remain than there are lags to estimate.
    pub fn min_observations(&self) -> usize {
        self.p + self.d + self.q + 1
    }
}

impl Default for ArimaOrder {
    /// ARIMA(5,1,0)
    fn default() -> Self {
        Self { p: 5, d: 1, q: 0 }
    }
}

impl fmt::Display for ArimaOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ARIMA({},{},{})", self.p, self.d, self.q)
    }
}
