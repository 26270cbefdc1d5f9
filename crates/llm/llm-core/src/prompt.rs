//! Prompt construction.

use llm_spi::{CompletionRequest, LlmError, Result};

/// Token budget for a sentiment judgment.
pub const SENTIMENT_MAX_TOKENS: u32 = 50;

/// Token budget for a free-form answer.
pub const QUESTION_MAX_TOKENS: u32 = 100;

/// Request a sentiment judgment for `symbol`.
pub fn sentiment_request(symbol: &str) -> CompletionRequest {
    let symbol = symbol.trim().to_uppercase();
    CompletionRequest::new(
        format!(
            "Analyze the sentiment for {symbol} stock based on recent news and social media posts."
        ),
        SENTIMENT_MAX_TOKENS,
    )
}

/// Pass a user question through verbatim.
pub fn question_request(question: &str) -> Result<CompletionRequest> {
    if question.trim().is_empty() {
        return Err(LlmError::EmptyPrompt);
    }
    Ok(CompletionRequest::new(question, QUESTION_MAX_TOKENS))
}
