//! Chat-completion client used for AI content generation and rewriting.

pub mod api;
pub mod config;
pub mod generator;

pub use api::{ChatCompletionApi, LlmError};
pub use config::LlmConfig;
pub use generator::ContentGenerator;
