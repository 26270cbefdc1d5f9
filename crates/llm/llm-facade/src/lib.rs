//! Language Model Facade
//!
//! The two questions the dashboard puts to a language model.
//!
//! # Example
//!
//! ```rust,no_run
//! use llm_facade::{analyze_sentiment, LlmConfig, OpenAiCompleter};
//!
//! let config = LlmConfig::builder().api_key("sk-...").build().unwrap();
//! let completer = OpenAiCompleter::new(&config).unwrap();
//! println!("{}", analyze_sentiment(&completer, "AAPL").unwrap());
//! ```

pub use llm_api::*;
pub use llm_core::*;

use tracing::debug;

/// Ask the model for a short sentiment judgment on `symbol`.
pub fn analyze_sentiment(completer: &dyn TextCompleter, symbol: &str) -> Result<String> {
    let request = sentiment_request(symbol);
    debug!(backend = completer.name(), symbol = %symbol.trim(), "Analyzing sentiment");
    Ok(completer.complete(&request)?.text)
}

/// Answer a free-form question.
pub fn ask_question(completer: &dyn TextCompleter, question: &str) -> Result<String> {
    let request = question_request(question)?;
    debug!(backend = completer.name(), "Asking question");
    Ok(completer.complete(&request)?.text)
}
