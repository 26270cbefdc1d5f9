//! Mock collaborators for unit tests.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use chrono::NaiveDate;
use data_facade::{GdpReading, GdpSource, InflationSource, Observation, StockSource, TimeSeries};
use explorer::{Collaborators, Explorer};
use forecast_facade::ArimaForecaster;
use llm_facade::{Completion, CompletionRequest, TextCompleter};

#[derive(Default)]
pub struct Calls {
    pub stocks: Rc<Cell<usize>>,
    pub inflation: Rc<Cell<usize>>,
    pub gdp: Rc<Cell<usize>>,
    pub llm: Rc<Cell<usize>>,
}

impl Calls {
    pub fn total(&self) -> usize {
        self.stocks.get() + self.inflation.get() + self.gdp.get() + self.llm.get()
    }
}

fn bump(counter: &Rc<Cell<usize>>) {
    counter.set(counter.get() + 1);
}

pub fn series(name: &str, len: usize) -> TimeSeries {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let steps = [1.0, -2.0, 3.0, 0.5, -1.0, 2.5, -0.5];
    let mut value = 100.0;
    let observations = (0..len)
        .map(|i| {
            let obs = Observation::new(start + chrono::Duration::days(i as i64), value);
            value += steps[i % steps.len()] + (i % 3) as f64 * 0.2;
            obs
        })
        .collect();
    TimeSeries::new(name, observations).unwrap()
}

struct Stocks(Rc<Cell<usize>>);

impl StockSource for Stocks {
    fn name(&self) -> &str {
        "mock"
    }

    fn daily_closes(&self, symbol: &str) -> data_facade::Result<TimeSeries> {
        bump(&self.0);
        Ok(series(&format!("{symbol} close"), 50))
    }
}

struct Inflation(Rc<Cell<usize>>);

impl InflationSource for Inflation {
    fn name(&self) -> &str {
        "mock"
    }

    fn cpi_series(&self) -> data_facade::Result<TimeSeries> {
        bump(&self.0);
        Ok(series("CPIAUCSL", 80))
    }
}

struct Gdp(Rc<Cell<usize>>);

impl GdpSource for Gdp {
    fn name(&self) -> &str {
        "mock"
    }

    fn latest_gdp(&self) -> data_facade::Result<GdpReading> {
        bump(&self.0);
        Ok(GdpReading::new(2.8, "http://example.test/gdp"))
    }
}

struct Llm(Rc<Cell<usize>>);

impl TextCompleter for Llm {
    fn name(&self) -> &str {
        "mock"
    }

    fn complete(&self, _request: &CompletionRequest) -> llm_facade::Result<Completion> {
        bump(&self.0);
        Ok(Completion {
            text: "mock answer".to_string(),
            model: "mock".to_string(),
            finish_reason: None,
        })
    }
}

/// An explorer over counting mocks that always succeed.
pub fn mock_explorer() -> (Explorer, Calls) {
    let calls = Calls::default();
    let parts = Collaborators {
        stocks: Box::new(Stocks(calls.stocks.clone())),
        inflation: Box::new(Inflation(calls.inflation.clone())),
        gdp: Box::new(Gdp(calls.gdp.clone())),
        completer: Box::new(Llm(calls.llm.clone())),
        forecaster: Box::new(ArimaForecaster::default()),
    };
    (Explorer::new(parts, 16, Duration::from_secs(900)), calls)
}
