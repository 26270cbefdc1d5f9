//! Text completion trait definition.

use crate::error::Result;
use crate::model::{Completion, CompletionRequest};

/// A hosted model that continues a prompt.
pub trait TextCompleter {
    /// Backend name.
    fn name(&self) -> &str;

    /// Complete `request.prompt` within `request.max_tokens`.
    fn complete(&self, request: &CompletionRequest) -> Result<Completion>;
}
