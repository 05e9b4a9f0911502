//! story-gemini – typed access to the Gemini `generateContent` API.
//!
//! [`GenerateContent`] is the seam the server depends on. [`GeminiClient`] is
//! the production implementation; tests substitute their own.

mod client;
mod error;
pub mod types;

use async_trait::async_trait;

pub use client::{DEFAULT_BASE_URL, GeminiClient};
pub use error::GeminiError;
pub use types::{
    Blob, Candidate, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    Part, Role, ThinkingConfig, UsageMetadata,
};

/// A remote generative model that answers one `generateContent` call.
#[async_trait]
pub trait GenerateContent: Send + Sync + 'static {
    async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GeminiError>;
}
