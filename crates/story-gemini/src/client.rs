//! HTTP client for the Gemini `generateContent` endpoint.

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, trace};

use crate::error::GeminiError;
use crate::types::{GenerateContentRequest, GenerateContentResponse};
use crate::GenerateContent;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Thin wrapper around a shared [`reqwest::Client`].
///
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_owned(),
        }
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, model)
    }
}

#[async_trait]
impl GenerateContent for GeminiClient {
    async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GeminiError> {
        let url = self.endpoint(model);
        trace!(%url, turns = request.contents.len(), "POST generateContent");

        let response = self
            .http
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(GeminiError::Api {
                status: status.as_u16(),
                message: api_error_message(status.as_u16(), &body),
            });
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body)?;
        debug!(
            model,
            candidates = parsed.candidates.len(),
            usage = ?parsed.usage_metadata,
            "generateContent done"
        );
        Ok(parsed)
    }
}

/// Pull `error.message` out of a provider error body, falling back to the raw
/// body when it is not the documented JSON shape.
fn api_error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(str::to_owned))
        .unwrap_or_else(|| format!("HTTP {status}: {body}"))
}

// ── Tests ──────────────────────────────────────────────────────────────────────
