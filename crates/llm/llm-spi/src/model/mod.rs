//! Completion request and response models.

mod completion;

pub use completion::{Completion, CompletionRequest};
