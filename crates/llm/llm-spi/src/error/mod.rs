//! Error types for completion backends.

mod llm_error;

pub use llm_error::{LlmError, Result};
