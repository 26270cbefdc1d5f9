//! Application state management for the TUI.

use std::time::Instant;

use explorer::{Dataset, Explorer, ExplorerError, GdpView, InflationView, StockView};
use tracing::info;

/// Main application state.
pub struct App {
    pub explorer: Explorer,
    /// Current active tab
    pub current_tab: Dataset,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Current input mode
    pub input_mode: InputMode,
    /// Text being typed in an editing mode
    pub input: String,
    /// Symbol shown on the Stock tab
    pub symbol: String,
    pub stock: Option<StockView>,
    pub inflation: Option<InflationView>,
    pub gdp: Option<GdpView>,
    /// Last question asked and its answer
    pub answer: Option<(String, Result<String, ExplorerError>)>,
    /// Status message with expiry
    pub status_message: Option<(String, Instant)>,
}

impl App {
    pub fn new(explorer: Explorer) -> Self {
        Self {
            explorer,
            current_tab: Dataset::Stock,
            should_quit: false,
            input_mode: InputMode::Normal,
            input: String::new(),
            symbol: String::new(),
            stock: None,
            inflation: None,
            gdp: None,
            answer: None,
            status_message: None,
        }
    }

    /// Set a status message that will be displayed temporarily.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some((message.into(), Instant::now()));
    }

    /// Clear expired status messages (older than 5 seconds).
    pub fn clear_expired_status(&mut self) {
        if let Some((_, instant)) = &self.status_message {
            if instant.elapsed().as_secs() > 5 {
                self.status_message = None;
            }
        }
    }

    pub fn next_tab(&mut self) {
        self.select_tab(self.current_tab.next());
    }

    pub fn previous_tab(&mut self) {
        self.select_tab(self.current_tab.previous());
    }

    /// Jump to a tab by its 1-based number. Out-of-range numbers are ignored.
    pub fn goto_tab(&mut self, num: u8) {
        if let Some(dataset) = (num as usize)
            .checked_sub(1)
            .and_then(Dataset::from_index)
        {
            self.select_tab(dataset);
        }
    }

    /// Switch tabs, loading Inflation and GDP the first time they are shown.
    pub fn select_tab(&mut self, dataset: Dataset) {
        self.current_tab = dataset;
        match dataset {
            Dataset::Inflation if self.inflation.is_none() => self.load_inflation(),
            Dataset::Gdp if self.gdp.is_none() => self.load_gdp(),
            _ => {}
        }
    }

    pub fn load_stock(&mut self, symbol: &str) {
        let view = self.explorer.stock_view(symbol);
        info!(symbol = %view.symbol, "Stock view loaded");
        self.set_status(format!("Loaded {}", view.symbol));
        self.symbol = view.symbol.clone();
        self.stock = Some(view);
    }

    pub fn load_inflation(&mut self) {
        self.inflation = Some(self.explorer.inflation_view());
        self.set_status("Loaded inflation");
    }

    pub fn load_gdp(&mut self) {
        self.gdp = Some(self.explorer.gdp_view());
        self.set_status("Loaded GDP");
    }

    /// Drop cached data for the current tab and load it again.
    pub fn refresh(&mut self) {
        match self.current_tab {
            Dataset::Stock => {
                if self.symbol.is_empty() {
                    self.set_status("No symbol to refresh. Press [s] to enter one.");
                    return;
                }
                let symbol = self.symbol.clone();
                self.explorer.refresh(Dataset::Stock, Some(&symbol));
                self.load_stock(&symbol);
            }
            Dataset::Inflation => {
                self.explorer.refresh(Dataset::Inflation, None);
                self.load_inflation();
            }
            Dataset::Gdp => {
                self.explorer.refresh(Dataset::Gdp, None);
                self.load_gdp();
            }
        }
    }

    pub fn ask(&mut self, question: &str) {
        let answer = self.explorer.ask(question);
        self.answer = Some((question.trim().to_string(), answer));
    }

    /// Enter an editing mode. The symbol editor starts from the current symbol.
    pub fn start_editing(&mut self, mode: InputMode) {
        self.input = match mode {
            InputMode::EditingSymbol => self.symbol.clone(),
            _ => String::new(),
        };
        self.input_mode = mode;
    }

    pub fn cancel_editing(&mut self) {
        self.input.clear();
        self.input_mode = InputMode::Normal;
    }

    /// Act on the typed text and return to normal mode.
    pub fn submit_input(&mut self) {
        let input = std::mem::take(&mut self.input);
        let mode = std::mem::replace(&mut self.input_mode, InputMode::Normal);

        match mode {
            InputMode::EditingSymbol => {
                if input.trim().is_empty() {
                    self.set_status("Symbol is empty.");
                } else {
                    self.current_tab = Dataset::Stock;
                    self.load_stock(&input);
                }
            }
            InputMode::EditingQuestion => {
                if input.trim().is_empty() {
                    self.set_status("Question is empty.");
                } else {
                    self.ask(&input);
                }
            }
            InputMode::Normal => {}
        }
    }
}

/// Input mode for the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    EditingSymbol,
    EditingQuestion,
}

impl InputMode {
    pub fn is_editing(self) -> bool {
        self != InputMode::Normal
    }
}
