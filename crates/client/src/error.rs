use lego_core::error::CoreError;

/// Errors from the backend client and the composer.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend returned a non-2xx status code.
    #[error("Backend error ({status}): {body}")]
    Api { status: u16, body: String },

    /// The configured backend URL cannot serve as a base for requests.
    #[error("Invalid backend URL: {0}")]
    InvalidUrl(String),

    /// Rejected locally before any request was sent.
    #[error(transparent)]
    Validation(#[from] CoreError),

    /// Writing an export to disk failed.
    #[error("Export write failed: {0}")]
    Io(#[from] std::io::Error),
}

impl ClientError {
    /// HTTP status of a backend rejection, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
