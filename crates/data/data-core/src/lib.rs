//! Data Source Core
//!
//! Implementations for data sources.

mod http;

pub mod cpi;
pub mod fmp;
pub mod gdp;

pub use cpi::CpiCsv;
pub use fmp::FinancialModelingPrep;
pub use gdp::GdpPage;
