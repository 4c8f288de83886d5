/// Default OpenAI-compatible endpoint base.
const DEFAULT_API_URL: &str = "https://api.deepseek.com/v1";

const DEFAULT_MODEL: &str = "deepseek-chat";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the chat-completion provider.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Base URL; `/chat/completions` is appended per request.
    pub api_url: String,
    /// Bearer token sent with every request.
    pub api_key: String,
    pub model: String,
    pub timeout_secs: u64,
}

impl LlmConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` if `LLM_API_KEY` is not set, signalling that generation
    /// is not configured and the AI endpoints should report it unavailable.
    ///
    /// | Variable           | Required | Default                        |
    /// |--------------------|----------|--------------------------------|
    /// | `LLM_API_KEY`      | yes      | -                              |
    /// | `LLM_API_URL`      | no       | `https://api.deepseek.com/v1`  |
    /// | `LLM_MODEL`        | no       | `deepseek-chat`                |
    /// | `LLM_TIMEOUT_SECS` | no       | `30`                           |
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var("LLM_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())?;
        Some(Self {
            api_url: std::env::var("LLM_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            api_key,
            model: std::env::var("LLM_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            timeout_secs: std::env::var("LLM_TIMEOUT_SECS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Configuration for an explicit endpoint, with default model and timeout.
    pub fn new(api_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}
