//! Forecast models

mod forecast;
mod order;

pub use forecast::{Forecast, FORECAST_HORIZON};
pub use order::ArimaOrder;
