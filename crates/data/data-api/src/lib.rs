//! Data Source API
//!
//! Configuration types and builders shared by the data source implementations.

pub mod config;

pub use config::{SourceConfig, SourceConfigBuilder};
