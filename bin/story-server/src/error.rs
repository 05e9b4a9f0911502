//! Unified server error type.
//!
//! Every story handler returns `Result<T, ServerError>`, which implements
//! [`axum::response::IntoResponse`] so errors are converted to a JSON body of
//! the form `{"detail": "..."}`.
//!
//! **Security note:** the provider error text is forwarded to the caller
//! verbatim inside `detail`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use story_gemini::GeminiError;
use thiserror::Error;
use tracing::debug;

/// Prefix for every 500 `detail` string.
pub const INTERNAL_ERROR_PREFIX: &str = "서버 내부 오류";

/// All errors that can occur while handling a story request.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Propagated from the Gemini client.
    #[error("{0}")]
    Model(#[from] GeminiError),

    /// The provider answered but with no usable text.
    #[error("유효한 응답 내용을 찾을 수 없습니다.")]
    EmptyResponse,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        // The handler has already logged the failure with its timing.
        debug!(error = %self, "mapping error to 500 response");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "detail": format!("{INTERNAL_ERROR_PREFIX}: {self}") })),
        )
            .into_response()
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
