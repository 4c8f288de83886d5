use std::sync::Arc;

use lego_llm::ContentGenerator;

use crate::config::ServerConfig;
use crate::error::AppError;

/// Shared application state available to all handlers via `State<AppState>`.
///
/// Cheaply cloneable: the pool is reference counted and everything else is
/// behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub pool: lego_db::DbPool,
    pub config: Arc<ServerConfig>,
    /// Text generator for the `/ai` endpoints. `None` when no provider is
    /// configured.
    pub generator: Option<Arc<dyn ContentGenerator>>,
}

impl AppState {
    pub fn generator(&self) -> Result<&dyn ContentGenerator, AppError> {
        self.generator
            .as_deref()
            .ok_or(AppError::GenerationUnavailable)
    }
}
