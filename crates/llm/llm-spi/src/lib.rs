//! Language Model Service Provider Interface
//!
//! Defines the text-completion contract used for sentiment and free-form
//! questions.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::TextCompleter;
pub use error::{LlmError, Result};
pub use model::{Completion, CompletionRequest};
