//! GDP figure scraped from a published page.

use data_api::SourceConfig;
use data_spi::{DataError, GdpReading, GdpSource, Result};
use reqwest::blocking::Client;
use scraper::{Html, Selector};
use tracing::{debug, info};

use crate::http::{build_client, fetch_text};

/// Reads the text of the first element matching a CSS selector as a number.
#[derive(Debug, Clone)]
pub struct GdpPage {
    client: Client,
    url: String,
    selector: Selector,
    selector_text: String,
}

impl GdpPage {
    /// Create the scraper; fails if the configured selector is not valid CSS.
    pub fn new(config: &SourceConfig) -> Result<Self> {
        let selector = Selector::parse(&config.gdp_selector).map_err(|e| {
            DataError::ConfigError(format!(
                "Invalid CSS selector '{}': {:?}",
                config.gdp_selector, e
            ))
        })?;

        Ok(Self {
            client: build_client(config)?,
            url: config.gdp_page_url.clone(),
            selector,
            selector_text: config.gdp_selector.clone(),
        })
    }

    fn extract_value(&self, html: &str) -> Result<f64> {
        let document = Html::parse_document(html);
        let element = document.select(&self.selector).next().ok_or_else(|| {
            DataError::ParseError(format!("no element matches '{}'", self.selector_text))
        })?;

        let text: String = element.text().collect();
        let text = text.trim();
        match text.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(DataError::ParseError(format!("{:?} is not a number", text))),
        }
    }
}

impl GdpSource for GdpPage {
    fn name(&self) -> &str {
        "gdp-page"
    }

    fn latest_gdp(&self) -> Result<GdpReading> {
        debug!(url = %self.url, selector = %self.selector_text, "scraping GDP");
        let body = fetch_text(self.client.get(&self.url), &self.url)?;
        let value = self.extract_value(&body)?;
        info!(value, "scraped GDP");
        Ok(GdpReading::new(value, self.url.clone()))
    }
}
