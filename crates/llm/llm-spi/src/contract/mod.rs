//! Contracts implemented by completion backends.

mod text_completer;

pub use text_completer::TextCompleter;
