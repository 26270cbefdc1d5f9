//! Consumer price index CSV download.

use chrono::NaiveDate;
use data_api::SourceConfig;
use data_spi::{DataError, InflationSource, Observation, Result, TimeSeries};
use reqwest::blocking::Client;
use tracing::{debug, info};

use crate::http::{build_client, fetch_text};

/// CPI series read from a CSV file whose first column is the date.
#[derive(Debug, Clone)]
pub struct CpiCsv {
    client: Client,
    url: String,
    column: String,
}

impl CpiCsv {
    pub fn new(config: &SourceConfig) -> Result<Self> {
        Ok(Self {
            client: build_client(config)?,
            url: config.cpi_csv_url.clone(),
            column: config.cpi_column.clone(),
        })
    }

    fn parse_date(field: &str) -> Result<NaiveDate> {
        let field = field.trim();
        NaiveDate::parse_from_str(field, "%Y-%m-%d")
            .map_err(|e| DataError::ParseError(format!("date {:?}: {}", field, e)))
    }

    fn parse_csv(&self, body: &str) -> Result<TimeSeries> {
        let mut reader = csv::Reader::from_reader(body.as_bytes());

        let headers = reader
            .headers()
            .map_err(|e| DataError::ParseError(e.to_string()))?
            .clone();

        let col_idx = headers
            .iter()
            .position(|h| h.trim() == self.column)
            .filter(|&idx| idx > 0)
            .ok_or_else(|| DataError::ParseError(format!("Column '{}' not found", self.column)))?;

        let mut observations = Vec::new();
        for result in reader.records() {
            let record = result.map_err(|e| DataError::ParseError(e.to_string()))?;
            let raw_date = record.get(0).unwrap_or_default();
            let date = Self::parse_date(raw_date)?;
            let value = record
                .get(col_idx)
                .and_then(|field| field.trim().parse::<f64>().ok())
                .ok_or_else(|| DataError::MissingValue(date.to_string()))?;
            observations.push(Observation::new(date, value));
        }

        if observations.is_empty() {
            return Err(DataError::NoData);
        }

        TimeSeries::new(self.column.clone(), observations)
    }
}

impl InflationSource for CpiCsv {
    fn name(&self) -> &str {
        "cpi-csv"
    }

    fn cpi_series(&self) -> Result<TimeSeries> {
        debug!(url = %self.url, "fetching CPI csv");
        let body = fetch_text(self.client.get(&self.url), &self.url)?;
        let series = self.parse_csv(&body)?;
        info!(points = series.len(), column = %self.column, "fetched CPI series");
        Ok(series)
    }
}
