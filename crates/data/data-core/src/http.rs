//! Blocking HTTP helpers shared by the sources.

use data_api::SourceConfig;
use data_spi::{DataError, Result};
use reqwest::blocking::{Client, RequestBuilder};

/// Build a client honouring the configured timeout and user agent.
pub(crate) fn build_client(config: &SourceConfig) -> Result<Client> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(config.timeout())
        .build()
        .map_err(|e| DataError::RequestFailed(e.to_string()))
}

/// Send `request` and return the body of a successful response.
///
/// `label` is used in errors instead of the full URL so query-string
/// credentials never end up in messages.
pub(crate) fn fetch_text(request: RequestBuilder, label: &str) -> Result<String> {
    let response = request
        .send()
        .map_err(|e| DataError::RequestFailed(e.without_url().to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(DataError::HttpStatus {
            status: status.as_u16(),
            url: label.to_string(),
        });
    }

    response
        .text()
        .map_err(|e| DataError::RequestFailed(e.without_url().to_string()))
}
