//! Data source trait definitions.

use crate::error::Result;
use crate::model::{GdpReading, TimeSeries};

/// Source of daily closing prices for a ticker symbol.
pub trait StockSource {
    /// Data source name.
    fn name(&self) -> &str;

    /// Fetch the daily closing price history for `symbol`, oldest first.
    fn daily_closes(&self, symbol: &str) -> Result<TimeSeries>;
}

/// Source of the consumer price index series.
pub trait InflationSource {
    /// Data source name.
    fn name(&self) -> &str;

    /// Fetch the full CPI series, oldest first.
    fn cpi_series(&self) -> Result<TimeSeries>;
}

/// Source of the headline GDP figure.
pub trait GdpSource {
    /// Data source name.
    fn name(&self) -> &str;

    /// Fetch the most recently published GDP value.
    fn latest_gdp(&self) -> Result<GdpReading>;
}
