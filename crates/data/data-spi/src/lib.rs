//! Data Source Service Provider Interface
//!
//! Defines traits and types for fetching economic time series data.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{GdpSource, InflationSource, StockSource};
pub use error::{DataError, Result};
pub use model::{GdpReading, Observation, SeriesStats, TimeSeries};
