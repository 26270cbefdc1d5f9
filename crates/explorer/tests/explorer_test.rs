//! Service tests
//!
//! Mock collaborators count their calls so caching and fail-soft behaviour
//! can be observed without a network.

use std::cell::Cell;
use std::net::TcpListener;
use std::rc::Rc;
use std::time::Duration;

use chrono::NaiveDate;
use data_facade::{
    DataError, GdpReading, GdpSource, InflationSource, Observation, StockSource, TimeSeries,
};
use explorer::{Collaborators, Dataset, Explorer, ExplorerConfig, ExplorerError};
use forecast_facade::{ArimaForecaster, ForecastError};
use llm_facade::{Completion, CompletionRequest, LlmError, TextCompleter};

fn series(name: &str, len: usize) -> TimeSeries {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let steps = [1.0, -2.0, 3.0, 3.0, -2.0, 4.0, 3.0, -2.0, 3.0];
    let mut value = 100.0;
    let observations = (0..len)
        .map(|i| {
            let obs = Observation::new(start + chrono::Duration::days(i as i64), value);
            value += steps[i % steps.len()] + (i % 5) as f64 * 0.1;
            obs
        })
        .collect();
    TimeSeries::new(name, observations).unwrap()
}

struct MockStocks {
    calls: Rc<Cell<usize>>,
    result: Result<TimeSeries, DataError>,
}

impl StockSource for MockStocks {
    fn name(&self) -> &str {
        "mock-stocks"
    }

    fn daily_closes(&self, _symbol: &str) -> data_facade::Result<TimeSeries> {
        self.calls.set(self.calls.get() + 1);
        self.result.clone()
    }
}

struct MockInflation {
    calls: Rc<Cell<usize>>,
    result: Result<TimeSeries, DataError>,
}

impl InflationSource for MockInflation {
    fn name(&self) -> &str {
        "mock-cpi"
    }

    fn cpi_series(&self) -> data_facade::Result<TimeSeries> {
        self.calls.set(self.calls.get() + 1);
        self.result.clone()
    }
}

struct MockGdp {
    calls: Rc<Cell<usize>>,
    result: Result<GdpReading, DataError>,
}

impl GdpSource for MockGdp {
    fn name(&self) -> &str {
        "mock-gdp"
    }

    fn latest_gdp(&self) -> data_facade::Result<GdpReading> {
        self.calls.set(self.calls.get() + 1);
        self.result.clone()
    }
}

struct MockCompleter {
    calls: Rc<Cell<usize>>,
    result: Result<String, LlmError>,
}

impl TextCompleter for MockCompleter {
    fn name(&self) -> &str {
        "mock-llm"
    }

    fn complete(&self, _request: &CompletionRequest) -> llm_facade::Result<Completion> {
        self.calls.set(self.calls.get() + 1);
        self.result.clone().map(|text| Completion {
            text,
            model: "mock".to_string(),
            finish_reason: None,
        })
    }
}

/// Call counters for each mock.
#[derive(Default)]
struct Calls {
    stocks: Rc<Cell<usize>>,
    inflation: Rc<Cell<usize>>,
    gdp: Rc<Cell<usize>>,
    llm: Rc<Cell<usize>>,
}

struct Fixture {
    stocks: Result<TimeSeries, DataError>,
    inflation: Result<TimeSeries, DataError>,
    gdp: Result<GdpReading, DataError>,
    llm: Result<String, LlmError>,
    cache_ttl: Duration,
}

impl Default for Fixture {
    fn default() -> Self {
        Self {
            stocks: Ok(series("AAPL close", 60)),
            inflation: Ok(series("CPIAUCSL", 120)),
            gdp: Ok(GdpReading::new(2.8, "http://example.test/gdp")),
            llm: Ok("Positive".to_string()),
            cache_ttl: Duration::from_secs(900),
        }
    }
}

impl Fixture {
    fn build(self) -> (Explorer, Calls) {
        let calls = Calls::default();
        let parts = Collaborators {
            stocks: Box::new(MockStocks {
                calls: calls.stocks.clone(),
                result: self.stocks,
            }),
            inflation: Box::new(MockInflation {
                calls: calls.inflation.clone(),
                result: self.inflation,
            }),
            gdp: Box::new(MockGdp {
                calls: calls.gdp.clone(),
                result: self.gdp,
            }),
            completer: Box::new(MockCompleter {
                calls: calls.llm.clone(),
                result: self.llm,
            }),
            forecaster: Box::new(ArimaForecaster::default()),
        };
        (Explorer::new(parts, 16, self.cache_ttl), calls)
    }
}

fn refused() -> DataError {
    DataError::RequestFailed("connection refused".to_string())
}

// ============================================================================
// Fail-soft views
// ============================================================================

#[test]
fn test_stock_view_all_sections() {
    let (mut explorer, _) = Fixture::default().build();
    let view = explorer.stock_view(" aapl ");

    assert_eq!(view.symbol, "AAPL");
    assert_eq!(view.prices.unwrap().len(), 60);
    assert_eq!(view.sentiment.unwrap(), "Positive");
    assert_eq!(view.forecast.unwrap().len(), 30);
}

#[test]
fn test_failed_prices_keep_sentiment() {
    let (mut explorer, _) = Fixture {
        stocks: Err(refused()),
        ..Fixture::default()
    }
    .build();
    let view = explorer.stock_view("AAPL");

    assert_eq!(view.prices.unwrap_err(), ExplorerError::Data(refused()));
    assert_eq!(view.sentiment.unwrap(), "Positive");
    assert!(matches!(view.forecast, Err(ExplorerError::Unavailable(_))));
}

#[test]
fn test_failed_sentiment_keeps_prices() {
    let (mut explorer, _) = Fixture {
        llm: Err(LlmError::MissingCredential("OPENAI_API_KEY")),
        ..Fixture::default()
    }
    .build();
    let view = explorer.stock_view("AAPL");

    assert!(view.prices.is_ok());
    assert!(view.forecast.is_ok());
    assert_eq!(
        view.sentiment.unwrap_err(),
        ExplorerError::Llm(LlmError::MissingCredential("OPENAI_API_KEY"))
    );
}

#[test]
fn test_short_series_fails_forecast_only() {
    let (mut explorer, _) = Fixture {
        stocks: Ok(series("AAPL close", 5)),
        ..Fixture::default()
    }
    .build();
    let view = explorer.stock_view("AAPL");

    assert_eq!(view.prices.unwrap().len(), 5);
    assert!(matches!(
        view.forecast,
        Err(ExplorerError::Forecast(ForecastError::InsufficientData { .. }))
    ));
}

#[test]
fn test_blank_symbol() {
    let (mut explorer, calls) = Fixture {
        stocks: Err(DataError::InvalidSymbol(String::new())),
        ..Fixture::default()
    }
    .build();
    let view = explorer.stock_view("   ");

    assert!(view.prices.is_err());
    assert!(matches!(
        view.sentiment,
        Err(ExplorerError::Data(DataError::InvalidSymbol(_)))
    ));
    assert_eq!(calls.llm.get(), 0);
}

#[test]
fn test_inflation_view() {
    let (mut explorer, _) = Fixture::default().build();
    let view = explorer.inflation_view();

    assert_eq!(view.series.unwrap().name(), "CPIAUCSL");
    let forecast = view.forecast.unwrap();
    assert_eq!(forecast.len(), 30);
    assert!(forecast.values.iter().all(|v| v.is_finite()));
}

#[test]
fn test_inflation_failure() {
    let (mut explorer, _) = Fixture {
        inflation: Err(DataError::MissingValue("2023-10-01".to_string())),
        ..Fixture::default()
    }
    .build();
    let view = explorer.inflation_view();

    assert!(matches!(
        view.series,
        Err(ExplorerError::Data(DataError::MissingValue(_)))
    ));
    assert!(matches!(view.forecast, Err(ExplorerError::Unavailable(_))));
}

#[test]
fn test_gdp_view() {
    let (mut explorer, _) = Fixture::default().build();
    assert_eq!(explorer.gdp_view().reading.unwrap().value, 2.8);

    let (mut explorer, _) = Fixture {
        gdp: Err(refused()),
        ..Fixture::default()
    }
    .build();
    assert!(explorer.gdp_view().reading.is_err());
}

// ============================================================================
// Caching
// ============================================================================

#[test]
fn test_successes_are_cached() {
    let (mut explorer, calls) = Fixture::default().build();

    explorer.stock_view("AAPL");
    explorer.stock_view("aapl");
    explorer.inflation_view();
    explorer.inflation_view();
    explorer.gdp_view();
    explorer.gdp_view();

    assert_eq!(calls.stocks.get(), 1);
    assert_eq!(calls.llm.get(), 1);
    assert_eq!(calls.inflation.get(), 1);
    assert_eq!(calls.gdp.get(), 1);
}

#[test]
fn test_symbols_cached_separately() {
    let (mut explorer, calls) = Fixture::default().build();
    explorer.stock_view("AAPL");
    explorer.stock_view("MSFT");
    assert_eq!(calls.stocks.get(), 2);
}

#[test]
fn test_failures_are_not_cached() {
    let (mut explorer, calls) = Fixture {
        gdp: Err(refused()),
        ..Fixture::default()
    }
    .build();

    explorer.gdp_view();
    explorer.gdp_view();
    assert_eq!(calls.gdp.get(), 2);
}

#[test]
fn test_expired_entries_refetch() {
    let (mut explorer, calls) = Fixture {
        cache_ttl: Duration::ZERO,
        ..Fixture::default()
    }
    .build();

    explorer.inflation_view();
    explorer.inflation_view();
    assert_eq!(calls.inflation.get(), 2);
}

#[test]
fn test_refresh_invalidates() {
    let (mut explorer, calls) = Fixture::default().build();

    explorer.stock_view("AAPL");
    explorer.stock_view("MSFT");
    explorer.refresh(Dataset::Stock, Some("aapl"));
    explorer.stock_view("AAPL");
    explorer.stock_view("MSFT");
    assert_eq!(calls.stocks.get(), 3);
    assert_eq!(calls.llm.get(), 3);

    explorer.refresh(Dataset::Stock, None);
    explorer.stock_view("MSFT");
    assert_eq!(calls.stocks.get(), 4);

    explorer.gdp_view();
    explorer.refresh(Dataset::Gdp, None);
    explorer.gdp_view();
    assert_eq!(calls.gdp.get(), 2);

    explorer.inflation_view();
    explorer.refresh(Dataset::Inflation, None);
    explorer.inflation_view();
    assert_eq!(calls.inflation.get(), 2);
}

// ============================================================================
// Questions
// ============================================================================

#[test]
fn test_answers_are_not_cached() {
    let (explorer, calls) = Fixture {
        llm: Ok("Inflation is rising prices.".to_string()),
        ..Fixture::default()
    }
    .build();

    assert_eq!(explorer.ask("What is inflation?").unwrap(), "Inflation is rising prices.");
    explorer.ask("What is inflation?").unwrap();
    assert_eq!(calls.llm.get(), 2);
}

#[test]
fn test_blank_question() {
    let (explorer, calls) = Fixture::default().build();
    assert_eq!(
        explorer.ask("  ").unwrap_err(),
        ExplorerError::Llm(LlmError::EmptyPrompt)
    );
    assert_eq!(calls.llm.get(), 0);
}

// ============================================================================
// Real collaborators against unreachable endpoints
// ============================================================================

fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

#[test]
fn test_unreachable_upstreams_still_produce_views() {
    let base = closed_port_url();
    let config = ExplorerConfig::from_lookup(|key| {
        let value = match key {
            "FMP_API_KEY" => "test".to_string(),
            "OPENAI_API_KEY" => "sk-test".to_string(),
            "FMP_BASE_URL" => base.clone(),
            "CPI_CSV_URL" => format!("{base}/cpi.csv"),
            "GDP_PAGE_URL" => format!("{base}/gdp"),
            "OPENAI_BASE_URL" => format!("{base}/v1"),
            "HTTP_TIMEOUT_SECS" | "LLM_TIMEOUT_SECS" => "2".to_string(),
            _ => return None,
        };
        Some(value)
    })
    .unwrap();
    let mut explorer = Explorer::from_config(&config).unwrap();

    let stock = explorer.stock_view("AAPL");
    assert!(matches!(
        stock.prices,
        Err(ExplorerError::Data(DataError::RequestFailed(_)))
    ));
    assert!(matches!(
        stock.sentiment,
        Err(ExplorerError::Llm(LlmError::RequestFailed(_)))
    ));
    assert!(stock.forecast.is_err());

    let inflation = explorer.inflation_view();
    assert!(inflation.series.is_err());
    assert!(inflation.forecast.is_err());

    assert!(explorer.gdp_view().reading.is_err());
}

#[test]
fn test_missing_credentials_fail_without_network() {
    let config = ExplorerConfig::from_lookup(|_| None).unwrap();
    let mut explorer = Explorer::from_config(&config).unwrap();

    let stock = explorer.stock_view("AAPL");
    assert_eq!(
        stock.prices.unwrap_err(),
        ExplorerError::Data(DataError::MissingCredential("FMP_API_KEY"))
    );
    assert_eq!(
        stock.sentiment.unwrap_err(),
        ExplorerError::Llm(LlmError::MissingCredential("OPENAI_API_KEY"))
    );
}

#[test]
#[ignore = "requires network access"]
fn test_live_public_sources() {
    let config = ExplorerConfig::from_env().unwrap();
    let mut explorer = Explorer::from_config(&config).unwrap();

    let inflation = explorer.inflation_view();
    assert!(inflation.series.unwrap().len() > 100);
    assert_eq!(inflation.forecast.unwrap().len(), 30);
    assert!(explorer.gdp_view().reading.unwrap().value.is_finite());
}
