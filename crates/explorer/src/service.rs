//! The dashboard service

use std::fmt;
use std::time::Duration;

use cache::{CacheKey, Operation, ResultCache};
use data_facade::{
    CpiCsv, DataError, FinancialModelingPrep, GdpPage, GdpReading, GdpSource, InflationSource,
    StockSource, TimeSeries,
};
use forecast_facade::{ArimaForecaster, Forecast, Forecaster, FORECAST_HORIZON};
use llm_facade::{analyze_sentiment, ask_question, OpenAiCompleter, TextCompleter};
use tracing::{info, warn};

use crate::config::ExplorerConfig;
use crate::error::{ExplorerError, Result};
use crate::view::{Dataset, GdpView, InflationView, Section, StockView};

/// The external collaborators an [`Explorer`] drives.
pub struct Collaborators {
    pub stocks: Box<dyn StockSource>,
    pub inflation: Box<dyn InflationSource>,
    pub gdp: Box<dyn GdpSource>,
    pub completer: Box<dyn TextCompleter>,
    pub forecaster: Box<dyn Forecaster>,
}

impl Collaborators {
    /// HTTP-backed collaborators built from configuration.
    pub fn from_config(config: &ExplorerConfig) -> Result<Self> {
        Ok(Self {
            stocks: Box::new(FinancialModelingPrep::new(&config.sources)?),
            inflation: Box::new(CpiCsv::new(&config.sources)?),
            gdp: Box::new(GdpPage::new(&config.sources)?),
            completer: Box::new(OpenAiCompleter::new(&config.llm)?),
            forecaster: Box::new(ArimaForecaster::default()),
        })
    }
}

/// Produces dashboard views, memoizing successful fetches.
pub struct Explorer {
    parts: Collaborators,
    series_cache: ResultCache<TimeSeries>,
    sentiment_cache: ResultCache<String>,
    gdp_cache: ResultCache<GdpReading>,
}

impl Explorer {
    pub fn new(parts: Collaborators, cache_capacity: usize, cache_ttl: Duration) -> Self {
        Self {
            parts,
            series_cache: ResultCache::new(cache_capacity, cache_ttl),
            sentiment_cache: ResultCache::new(cache_capacity, cache_ttl),
            gdp_cache: ResultCache::new(cache_capacity, cache_ttl),
        }
    }

    pub fn from_config(config: &ExplorerConfig) -> Result<Self> {
        let parts = Collaborators::from_config(config)?;
        info!(
            stocks = parts.stocks.name(),
            inflation = parts.inflation.name(),
            gdp = parts.gdp.name(),
            llm = parts.completer.name(),
            forecaster = %parts.forecaster.name(),
            "Explorer ready"
        );
        Ok(Self::new(parts, config.cache_capacity, config.cache_ttl()))
    }

    /// Closing prices, sentiment and a price forecast for `symbol`.
    pub fn stock_view(&mut self, symbol: &str) -> StockView {
        let symbol = symbol.trim().to_uppercase();

        let prices = self.stock_prices(&symbol);
        log_section("stock prices", &prices);

        let sentiment = self.sentiment(&symbol);
        log_section("sentiment", &sentiment);

        let forecast = self.forecast_of(&prices, "price");
        log_section("price forecast", &forecast);

        StockView {
            symbol,
            prices,
            sentiment,
            forecast,
        }
    }

    /// CPI series and its forecast.
    pub fn inflation_view(&mut self) -> InflationView {
        let key = CacheKey::new(Operation::Inflation, "");
        let inflation = &self.parts.inflation;
        let series = cached(&mut self.series_cache, key, || Ok(inflation.cpi_series()?));
        log_section("cpi series", &series);

        let forecast = self.forecast_of(&series, "cpi");
        log_section("cpi forecast", &forecast);

        InflationView { series, forecast }
    }

    pub fn gdp_view(&mut self) -> GdpView {
        let key = CacheKey::new(Operation::Gdp, "");
        let gdp = &self.parts.gdp;
        let reading = cached(&mut self.gdp_cache, key, || Ok(gdp.latest_gdp()?));
        log_section("gdp", &reading);

        GdpView { reading }
    }

    /// Answer a free-form question. Answers are never cached.
    pub fn ask(&self, question: &str) -> Result<String> {
        let answer: Result<String> = ask_question(self.parts.completer.as_ref(), question).map_err(Into::into);
        log_section("answer", &answer);
        answer
    }

    /// Drop cached results behind `dataset`. For stocks, `symbol` limits the
    /// refresh to one symbol; `None` drops every symbol.
    pub fn refresh(&mut self, dataset: Dataset, symbol: Option<&str>) {
        match dataset {
            Dataset::Stock => match symbol.map(|s| s.trim().to_uppercase()) {
                Some(symbol) => {
                    self.series_cache
                        .invalidate(&CacheKey::new(Operation::StockPrices, symbol.as_str()));
                    self.sentiment_cache
                        .invalidate(&CacheKey::new(Operation::Sentiment, symbol));
                }
                None => {
                    self.series_cache.invalidate_operation(Operation::StockPrices);
                    self.sentiment_cache.invalidate_operation(Operation::Sentiment);
                }
            },
            Dataset::Inflation => {
                self.series_cache.invalidate_operation(Operation::Inflation);
            }
            Dataset::Gdp => {
                self.gdp_cache.invalidate_operation(Operation::Gdp);
            }
        }
        info!(dataset = %dataset, symbol = symbol.unwrap_or(""), "Refreshed");
    }

    fn stock_prices(&mut self, symbol: &str) -> Section<TimeSeries> {
        let key = CacheKey::new(Operation::StockPrices, symbol);
        let stocks = &self.parts.stocks;
        cached(&mut self.series_cache, key, || Ok(stocks.daily_closes(symbol)?))
    }

    fn sentiment(&mut self, symbol: &str) -> Section<String> {
        if symbol.is_empty() {
            return Err(DataError::InvalidSymbol(String::new()).into());
        }
        let key = CacheKey::new(Operation::Sentiment, symbol);
        let completer = &self.parts.completer;
        cached(&mut self.sentiment_cache, key, || {
            Ok(analyze_sentiment(completer.as_ref(), symbol)?)
        })
    }

    fn forecast_of(&self, series: &Section<TimeSeries>, label: &str) -> Section<Forecast> {
        match series {
            Ok(series) => Ok(self
                .parts
                .forecaster
                .forecast(&series.values(), FORECAST_HORIZON)?),
            Err(_) => Err(ExplorerError::Unavailable(format!("no {label} series to forecast"))),
        }
    }
}

impl fmt::Debug for Explorer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Explorer")
            .field("stocks", &self.parts.stocks.name())
            .field("inflation", &self.parts.inflation.name())
            .field("gdp", &self.parts.gdp.name())
            .field("llm", &self.parts.completer.name())
            .field("forecaster", &self.parts.forecaster.name())
            .field("series_cache", &self.series_cache)
            .finish()
    }
}

/// Return the cached value for `key`, or run `fetch` and cache its success.
fn cached<V, F>(cache: &mut ResultCache<V>, key: CacheKey, fetch: F) -> Section<V>
where
    V: Clone,
    F: FnOnce() -> Section<V>,
{
    if let Some(value) = cache.get(&key) {
        return Ok(value);
    }
    let value = fetch()?;
    cache.put(key, value.clone());
    Ok(value)
}

fn log_section<T>(section: &str, result: &Section<T>) {
    if let Err(e) = result {
        warn!(section, error = %e, "Section unavailable");
    }
}
