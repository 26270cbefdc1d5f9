//! Data Source Facade
//!
//! Unified re-exports for the data module.
//!
//! This facade provides a single entry point for all data source functionality:
//! - `data_spi` - Traits, types, and errors for data sources
//! - `data_api` - Configuration types and builders
//! - `data_core` - Implementations (financial API, CPI CSV, GDP page)
//!
//! # Example
//!
//! ```rust,no_run
//! use data_facade::{FinancialModelingPrep, SourceConfig, StockSource};
//!
//! let config = SourceConfig::builder().fmp_api_key("demo").build().unwrap();
//! let closes = FinancialModelingPrep::new(&config)
//!     .and_then(|fmp| fmp.daily_closes("AAPL"))
//!     .unwrap();
//! println!("Got {} price points", closes.len());
//! ```

// Re-export everything from SPI
pub use data_spi::*;

// Re-export everything from API
pub use data_api::*;

// Re-export everything from Core
pub use data_core::*;
