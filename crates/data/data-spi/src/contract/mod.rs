//! Contracts implemented by data source backends.

mod data_source;

pub use data_source::{GdpSource, InflationSource, StockSource};
