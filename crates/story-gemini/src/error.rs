use thiserror::Error;

/// Errors returned by [`crate::GeminiClient`].
#[derive(Debug, Error)]
pub enum GeminiError {
    /// Transport-level failure (DNS, TLS, connection reset, …).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered with a non-success status.
    #[error("Gemini API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The provider body was not a valid `generateContent` response.
    #[error("failed to parse response JSON: {0}")]
    Decode(#[from] serde_json::Error),
}
