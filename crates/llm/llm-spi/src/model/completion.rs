//! Completion request and response.

use serde::{Deserialize, Serialize};

/// A prompt with a token budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub prompt: String,
    pub max_tokens: u32,
}

impl CompletionRequest {
    pub fn new(prompt: impl Into<String>, max_tokens: u32) -> Self {
        Self {
            prompt: prompt.into(),
            max_tokens,
        }
    }
}

/// Generated text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completion {
    /// Completion text with surrounding whitespace removed
    pub text: String,
    /// Model that produced the text
    pub model: String,
    /// Why generation stopped (`stop`, `length`, ...)
    pub finish_reason: Option<String>,
}
