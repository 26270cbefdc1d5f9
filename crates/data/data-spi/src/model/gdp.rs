//! Scraped GDP figure.

use serde::{Deserialize, Serialize};

/// A GDP value read from a published page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GdpReading {
    /// Parsed value as published (typically percent change, annualized)
    pub value: f64,
    /// Page the value was read from
    pub source_url: String,
}

impl GdpReading {
    pub fn new(value: f64, source_url: impl Into<String>) -> Self {
        Self {
            value,
            source_url: source_url.into(),
        }
    }
}
