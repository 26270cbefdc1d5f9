//! Financial Modeling Prep price fetcher
//!
//! Fetches daily price history from the `historical-price-full` endpoint.
//!
//! # Example
//!
//! ```rust,no_run
//! use data_api::SourceConfig;
//! use data_core::FinancialModelingPrep;
//! use data_spi::StockSource;
//!
//! let config = SourceConfig::builder().fmp_api_key("demo").build().unwrap();
//! let fmp = FinancialModelingPrep::new(&config).unwrap();
//! let closes = fmp.daily_closes("AAPL").unwrap();
//! println!("Got {} price points", closes.len());
//! ```

use chrono::NaiveDate;
use data_api::SourceConfig;
use data_spi::{DataError, Observation, Result, StockSource, TimeSeries};
use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::{debug, info};

use crate::http::{build_client, fetch_text};

/// Response body of `historical-price-full/{symbol}`
#[derive(Debug, Deserialize)]
struct HistoricalResponse {
    #[serde(default)]
    historical: Option<Vec<HistoricalRecord>>,
    #[serde(rename = "Error Message", default)]
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct HistoricalRecord {
    date: String,
    #[serde(default)]
    close: Option<f64>,
}

/// Financial Modeling Prep client
#[derive(Debug, Clone)]
pub struct FinancialModelingPrep {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl FinancialModelingPrep {
    /// Create a new client from configuration
    pub fn new(config: &SourceConfig) -> Result<Self> {
        Ok(Self {
            client: build_client(config)?,
            base_url: config.fmp_base_url.trim_end_matches('/').to_string(),
            api_key: config.fmp_api_key.clone(),
        })
    }

    /// Normalize a user-entered symbol
    fn normalize_symbol(symbol: &str) -> Result<String> {
        let symbol = symbol.trim().to_uppercase();
        let valid = !symbol.is_empty()
            && symbol
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '^' | '='));
        if valid {
            Ok(symbol)
        } else {
            Err(DataError::InvalidSymbol(symbol))
        }
    }

    /// Build the endpoint URL (without credentials)
    fn build_url(&self, symbol: &str) -> String {
        format!("{}/historical-price-full/{}", self.base_url, symbol)
    }

    /// Parse the JSON body into a chronological close series
    fn parse_response(symbol: &str, json: &str) -> Result<TimeSeries> {
        let response: HistoricalResponse =
            serde_json::from_str(json).map_err(|e| DataError::ParseError(e.to_string()))?;

        if let Some(message) = response.error_message {
            return Err(DataError::ApiError(message));
        }

        let records = response.historical.ok_or(DataError::NoData)?;
        if records.is_empty() {
            return Err(DataError::NoData);
        }

        let observations = records
            .into_iter()
            .map(|record| {
                let date = NaiveDate::parse_from_str(&record.date, "%Y-%m-%d")
                    .map_err(|e| DataError::ParseError(format!("date {:?}: {}", record.date, e)))?;
                let close = record
                    .close
                    .ok_or_else(|| DataError::MissingValue(record.date.clone()))?;
                Ok(Observation::new(date, close))
            })
            .collect::<Result<Vec<_>>>()?;

        TimeSeries::new(format!("{symbol} close"), observations)
    }
}

impl StockSource for FinancialModelingPrep {
    fn name(&self) -> &str {
        "financialmodelingprep"
    }

    fn daily_closes(&self, symbol: &str) -> Result<TimeSeries> {
        let symbol = Self::normalize_symbol(symbol)?;
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(DataError::MissingCredential("FMP_API_KEY"))?;

        let url = self.build_url(&symbol);
        debug!(%url, "fetching daily closes");

        let body = fetch_text(self.client.get(&url).query(&[("apikey", api_key)]), &url)?;
        let series = Self::parse_response(&symbol, &body)?;

        info!(symbol = %symbol, points = series.len(), "fetched daily closes");
        Ok(series)
    }
}
