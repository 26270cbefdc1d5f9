//! Data source configuration types.

use std::fmt;
use std::time::Duration;

use data_spi::{DataError, Result};
use serde::{Deserialize, Serialize};

/// Default Financial Modeling Prep API root.
pub const DEFAULT_FMP_BASE_URL: &str = "https://financialmodelingprep.com/api/v3";
/// Default CPI download (FRED graph CSV, one `CPIAUCSL` column).
pub const DEFAULT_CPI_CSV_URL: &str = "https://fred.stlouisfed.org/graph/fredgraph.csv?id=CPIAUCSL";
pub const DEFAULT_CPI_COLUMN: &str = "CPIAUCSL";
pub const DEFAULT_GDP_PAGE_URL: &str = "https://www.bea.gov/news/schedule";
pub const DEFAULT_GDP_SELECTOR: &str = "span.chart-output";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_USER_AGENT: &str = concat!("econ-explorer/", env!("CARGO_PKG_VERSION"));

/// Endpoints, credentials and transport settings for all three data sources.
#[derive(Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Root of the financial-data API (no trailing slash)
    pub fmp_base_url: String,
    /// API key for the financial-data API
    pub fmp_api_key: Option<String>,
    /// CSV download holding the CPI series
    pub cpi_csv_url: String,
    /// Header of the CPI value column
    pub cpi_column: String,
    /// Page carrying the GDP figure
    pub gdp_page_url: String,
    /// CSS selector of the element holding the GDP figure
    pub gdp_selector: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// User agent sent with every request
    pub user_agent: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            fmp_base_url: DEFAULT_FMP_BASE_URL.to_string(),
            fmp_api_key: None,
            cpi_csv_url: DEFAULT_CPI_CSV_URL.to_string(),
            cpi_column: DEFAULT_CPI_COLUMN.to_string(),
            gdp_page_url: DEFAULT_GDP_PAGE_URL.to_string(),
            gdp_selector: DEFAULT_GDP_SELECTOR.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl SourceConfig {
    /// Request timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Start a builder from the defaults.
    pub fn builder() -> SourceConfigBuilder {
        SourceConfigBuilder::new()
    }
}

// Keeps the API key out of logs.
impl fmt::Debug for SourceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceConfig")
            .field("fmp_base_url", &self.fmp_base_url)
            .field("fmp_api_key", &self.fmp_api_key.as_ref().map(|_| "<redacted>"))
            .field("cpi_csv_url", &self.cpi_csv_url)
            .field("cpi_column", &self.cpi_column)
            .field("gdp_page_url", &self.gdp_page_url)
            .field("gdp_selector", &self.gdp_selector)
            .field("timeout_secs", &self.timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

/// Builder for SourceConfig.
#[derive(Debug, Default)]
pub struct SourceConfigBuilder {
    config: SourceConfig,
}

impl SourceConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fmp_base_url(mut self, url: &str) -> Self {
        self.config.fmp_base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Set the financial-data API key. Blank keys count as absent.
    pub fn fmp_api_key(mut self, key: &str) -> Self {
        let key = key.trim();
        self.config.fmp_api_key = (!key.is_empty()).then(|| key.to_string());
        self
    }

    pub fn cpi_csv_url(mut self, url: &str) -> Self {
        self.config.cpi_csv_url = url.to_string();
        self
    }

    pub fn cpi_column(mut self, column: &str) -> Self {
        self.config.cpi_column = column.to_string();
        self
    }

    pub fn gdp_page_url(mut self, url: &str) -> Self {
        self.config.gdp_page_url = url.to_string();
        self
    }

    pub fn gdp_selector(mut self, selector: &str) -> Self {
        self.config.gdp_selector = selector.to_string();
        self
    }

    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.config.timeout_secs = secs;
        self
    }

    pub fn user_agent(mut self, agent: &str) -> Self {
        self.config.user_agent = agent.to_string();
        self
    }

    /// Build the configuration.
    pub fn build(self) -> Result<SourceConfig> {
        let config = self.config;
        if config.timeout_secs == 0 {
            return Err(DataError::ConfigError("timeout must be at least 1 second".to_string()));
        }
        for (name, value) in [
            ("fmp_base_url", &config.fmp_base_url),
            ("cpi_csv_url", &config.cpi_csv_url),
            ("gdp_page_url", &config.gdp_page_url),
        ] {
            if !(value.starts_with("http://") || value.starts_with("https://")) {
                return Err(DataError::ConfigError(format!("{name} must be an http(s) URL")));
            }
        }
        if config.cpi_column.trim().is_empty() {
            return Err(DataError::ConfigError("cpi_column is required".to_string()));
        }
        if config.gdp_selector.trim().is_empty() {
            return Err(DataError::ConfigError("gdp_selector is required".to_string()));
        }
        Ok(config)
    }
}
