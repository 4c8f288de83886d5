/// Backend client configuration loaded from environment variables.
///
/// | Env var                      | Default                 |
/// |------------------------------|-------------------------|
/// | `CONTENT_LEGO_API_URL`       | `http://localhost:8000` |
/// | `CONTENT_LEGO_TIMEOUT_SECS`  | `10`                    |
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_url: String,
    pub timeout_secs: u64,
}

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

impl ClientConfig {
    pub fn from_env() -> Self {
        let api_url =
            std::env::var("CONTENT_LEGO_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.into());
        let timeout_secs = std::env::var("CONTENT_LEGO_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            api_url,
            timeout_secs,
        }
    }

    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}
