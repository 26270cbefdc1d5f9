//! Environment-driven configuration
//!
//! Reads the settings of every collaborator from environment variables
//! (optionally seeded from a `.env` file). This is the only place the
//! process environment is consulted.

use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use cache::{DEFAULT_CAPACITY, DEFAULT_TTL};
use data_facade::config::DEFAULT_TIMEOUT_SECS;
use data_facade::SourceConfig;
use llm_facade::config::DEFAULT_TIMEOUT_SECS as DEFAULT_LLM_TIMEOUT_SECS;
use llm_facade::LlmConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{ExplorerError, Result};

/// Settings for the whole dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplorerConfig {
    pub sources: SourceConfig,
    pub llm: LlmConfig,
    pub cache_capacity: usize,
    pub cache_ttl_secs: u64,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            sources: SourceConfig::default(),
            llm: LlmConfig::default(),
            cache_capacity: DEFAULT_CAPACITY,
            cache_ttl_secs: DEFAULT_TTL.as_secs(),
        }
    }
}

impl ExplorerConfig {
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    /// Load variables from `path`, or from `.env` in the working directory
    /// (or a parent) when `path` is `None`.
    ///
    /// A missing default `.env` is not an error; a missing explicit file is.
    /// Variables already set in the environment win.
    pub fn load_env_file(path: Option<&Path>) -> Result<Option<PathBuf>> {
        match path {
            Some(path) => {
                dotenvy::from_path(path).map_err(|e| {
                    ExplorerError::Config(format!("cannot load {}: {e}", path.display()))
                })?;
                info!(path = %path.display(), "Loaded environment file");
                Ok(Some(path.to_path_buf()))
            }
            None => match dotenvy::dotenv() {
                Ok(found) => {
                    info!(path = %found.display(), "Loaded environment file");
                    Ok(Some(found))
                }
                Err(e) if e.not_found() => Ok(None),
                Err(e) => Err(ExplorerError::Config(format!("cannot load .env: {e}"))),
            },
        }
    }

    /// Build from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut sources = SourceConfig::builder()
            .timeout_secs(parse_or(&get, "HTTP_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS));
        if let Some(key) = get("FMP_API_KEY") {
            sources = sources.fmp_api_key(&key);
        }
        if let Some(url) = get("FMP_BASE_URL") {
            sources = sources.fmp_base_url(&url);
        }
        if let Some(url) = get("CPI_CSV_URL") {
            sources = sources.cpi_csv_url(&url);
        }
        if let Some(column) = get("CPI_COLUMN") {
            sources = sources.cpi_column(&column);
        }
        if let Some(url) = get("GDP_PAGE_URL") {
            sources = sources.gdp_page_url(&url);
        }
        if let Some(selector) = get("GDP_SELECTOR") {
            sources = sources.gdp_selector(&selector);
        }

        let mut llm = LlmConfig::builder()
            .timeout_secs(parse_or(&get, "LLM_TIMEOUT_SECS", DEFAULT_LLM_TIMEOUT_SECS));
        if let Some(key) = get("OPENAI_API_KEY") {
            llm = llm.api_key(&key);
        }
        if let Some(url) = get("OPENAI_BASE_URL") {
            llm = llm.base_url(&url);
        }
        if let Some(model) = get("OPENAI_MODEL") {
            llm = llm.model(&model);
        }

        let config = Self {
            sources: sources.build()?,
            llm: llm.build()?,
            cache_capacity: parse_or(&get, "CACHE_CAPACITY", DEFAULT_CAPACITY),
            cache_ttl_secs: parse_or(&get, "CACHE_TTL_SECS", DEFAULT_TTL.as_secs()),
        };

        if config.sources.fmp_api_key.is_none() {
            warn!("FMP_API_KEY not set; stock prices will be unavailable");
        }
        if config.llm.api_key.is_none() {
            warn!("OPENAI_API_KEY not set; sentiment and questions will be unavailable");
        }

        Ok(config)
    }
}

fn parse_or<T, G>(get: &G, key: &str, default: T) -> T
where
    T: FromStr + Display,
    G: Fn(&str) -> Option<String>,
{
    match get(key) {
        None => default,
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            warn!(key, value = %raw, default = %default, "Ignoring unparseable setting");
            default
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ExplorerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.sources.fmp_api_key, None);
        assert_eq!(config.sources.cpi_column, "CPIAUCSL");
        assert_eq!(config.sources.timeout_secs, 10);
        assert_eq!(config.llm.api_key, None);
        assert_eq!(config.llm.timeout_secs, 30);
        assert_eq!(config.cache_capacity, 64);
        assert_eq!(config.cache_ttl(), Duration::from_secs(900));
    }

    #[test]
    fn test_values_read() {
        let config = ExplorerConfig::from_lookup(lookup(&[
            ("FMP_API_KEY", "fmp-key"),
            ("FMP_BASE_URL", "http://localhost:1/api/v3"),
            ("CPI_CSV_URL", "http://localhost:1/cpi.csv"),
            ("CPI_COLUMN", "CPILFESL"),
            ("GDP_PAGE_URL", "http://localhost:1/gdp"),
            ("GDP_SELECTOR", "td.value"),
            ("HTTP_TIMEOUT_SECS", "3"),
            ("OPENAI_API_KEY", "sk-test"),
            ("OPENAI_BASE_URL", "http://localhost:2/v1"),
            ("OPENAI_MODEL", "local"),
            ("LLM_TIMEOUT_SECS", "7"),
            ("CACHE_CAPACITY", "8"),
            ("CACHE_TTL_SECS", "0"),
        ]))
        .unwrap();

        assert_eq!(config.sources.fmp_api_key.as_deref(), Some("fmp-key"));
        assert_eq!(config.sources.fmp_base_url, "http://localhost:1/api/v3");
        assert_eq!(config.sources.cpi_column, "CPILFESL");
        assert_eq!(config.sources.gdp_selector, "td.value");
        assert_eq!(config.sources.timeout_secs, 3);
        assert_eq!(config.llm.api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.llm.model, "local");
        assert_eq!(config.llm.timeout_secs, 7);
        assert_eq!(config.cache_capacity, 8);
        assert_eq!(config.cache_ttl_secs, 0);
    }

    #[test]
    fn test_unparseable_numbers_fall_back() {
        let config = ExplorerConfig::from_lookup(lookup(&[
            ("HTTP_TIMEOUT_SECS", "soon"),
            ("CACHE_CAPACITY", "-1"),
        ]))
        .unwrap();
        assert_eq!(config.sources.timeout_secs, 10);
        assert_eq!(config.cache_capacity, 64);
    }

    #[test]
    fn test_blank_key_is_absent() {
        let config = ExplorerConfig::from_lookup(lookup(&[("OPENAI_API_KEY", "  ")])).unwrap();
        assert_eq!(config.llm.api_key, None);
    }

    #[test]
    fn test_invalid_url_rejected() {
        let err = ExplorerConfig::from_lookup(lookup(&[("GDP_PAGE_URL", "bea.gov")])).unwrap_err();
        assert!(matches!(err, ExplorerError::Data(_)));
    }

    #[test]
    fn test_load_env_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "ECON_EXPLORER_TEST_SETTING=from-file").unwrap();

        let loaded = ExplorerConfig::load_env_file(Some(file.path())).unwrap();
        assert_eq!(loaded.as_deref(), Some(file.path()));
        assert_eq!(
            std::env::var("ECON_EXPLORER_TEST_SETTING").as_deref(),
            Ok("from-file")
        );
    }

    #[test]
    fn test_missing_explicit_env_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ExplorerConfig::load_env_file(Some(&dir.path().join("absent.env"))).unwrap_err();
        assert!(matches!(err, ExplorerError::Config(_)));
    }
}
