//! Shared application state injected into every Axum handler.

use std::sync::Arc;

use story_gemini::GenerateContent;

use crate::config::Config;

/// State shared across all HTTP handlers. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration (env-derived).
    pub config: Arc<Config>,
    /// Remote model used by the story endpoints.
    pub model: Arc<dyn GenerateContent>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
