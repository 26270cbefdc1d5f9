//! Language Model API
//!
//! Configuration types and builders for completion backends.

pub mod config;

pub use config::{LlmConfig, LlmConfigBuilder};
