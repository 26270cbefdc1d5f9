//! Data models for economic time series.

mod gdp;
mod observation;
mod series;

pub use gdp::GdpReading;
pub use observation::Observation;
pub use series::{SeriesStats, TimeSeries};
