//! Error types for data sources.

mod data_error;

pub use data_error::{DataError, Result};
