//! Language Model Core
//!
//! Completion backend for OpenAI-compatible services and the prompts the
//! dashboard sends to it.

pub mod openai;
pub mod prompt;

pub use llm_spi::*;
pub use openai::OpenAiCompleter;
pub use prompt::{question_request, sentiment_request, QUESTION_MAX_TOKENS, SENTIMENT_MAX_TOKENS};
