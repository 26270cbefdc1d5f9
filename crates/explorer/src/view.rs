//! View models handed to the presentation layer

use std::fmt;

use data_facade::{GdpReading, TimeSeries};
use forecast_facade::Forecast;
use serde::{Deserialize, Serialize};

use crate::error::ExplorerError;

/// One independently failing part of a view.
pub type Section<T> = std::result::Result<T, ExplorerError>;

/// The data view the user has selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Dataset {
    #[default]
    Stock,
    Inflation,
    Gdp,
}

impl Dataset {
    pub const ALL: [Dataset; 3] = [Dataset::Stock, Dataset::Inflation, Dataset::Gdp];

    pub fn title(&self) -> &'static str {
        match self {
            Dataset::Stock => "Stock",
            Dataset::Inflation => "Inflation",
            Dataset::Gdp => "GDP",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Dataset::Stock => 0,
            Dataset::Inflation => 1,
            Dataset::Gdp => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Closing prices, sentiment and price forecast for one symbol.
#[derive(Debug, Clone)]
pub struct StockView {
    /// Normalized (trimmed, upper-case) symbol
    pub symbol: String,
    pub prices: Section<TimeSeries>,
    pub sentiment: Section<String>,
    pub forecast: Section<Forecast>,
}

/// CPI series and its forecast.
#[derive(Debug, Clone)]
pub struct InflationView {
    pub series: Section<TimeSeries>,
    pub forecast: Section<Forecast>,
}

/// Latest GDP figure.
#[derive(Debug, Clone)]
pub struct GdpView {
    pub reading: Section<GdpReading>,
}
