//! Explorer service
//!
//! Composes the data sources, the forecaster and the language model into
//! the three dashboard views. Every section of a view is an independent
//! `Result`, so one failing upstream never hides the others.
//!
//! # Example
//!
//! ```rust,no_run
//! use explorer::{Explorer, ExplorerConfig};
//!
//! ExplorerConfig::load_env_file(None).unwrap();
//! let config = ExplorerConfig::from_env().unwrap();
//! let mut explorer = Explorer::from_config(&config).unwrap();
//!
//! let view = explorer.stock_view("AAPL");
//! match &view.prices {
//!     Ok(series) => println!("{} closes", series.len()),
//!     Err(e) => println!("prices unavailable: {e}"),
//! }
//! ```

pub mod config;
pub mod error;
pub mod service;
pub mod view;

pub use config::ExplorerConfig;
pub use error::{ExplorerError, Result};
pub use service::{Collaborators, Explorer};
pub use view::{Dataset, GdpView, InflationView, Section, StockView};

// Types the presentation layer needs without depending on every stack
pub use data_facade::{GdpReading, Observation, SeriesStats, TimeSeries};
pub use forecast_facade::{Forecast, FORECAST_HORIZON};
