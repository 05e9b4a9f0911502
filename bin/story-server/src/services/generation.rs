//! The one model invocation every endpoint is built on.

use story_gemini::{
    Content, GenerateContent, GenerateContentRequest, GenerationConfig, Part, Role,
};

use crate::error::ServerError;

/// Everything that varies between endpoints.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub instruction: String,
    pub history: Vec<Content>,
    /// Parts of the new user turn: the prompt text, optionally followed by media.
    pub parts: Vec<Part>,
    pub sampling: GenerationConfig,
}

impl Invocation {
    fn into_request(self) -> GenerateContentRequest {
        let mut contents = self.history;
        contents.push(Content::with_parts(Role::User, self.parts));
        GenerateContentRequest {
            system_instruction: Some(Content::system(self.instruction)),
            contents,
            generation_config: Some(self.sampling),
        }
    }
}

/// Send one `generateContent` call and return the trimmed text of the first
/// candidate.
///
/// Fails with [`ServerError::EmptyResponse`] when the provider returns no
/// candidate, no content, or no parts.
pub async fn generate(
    model: &dyn GenerateContent,
    model_id: &str,
    invocation: Invocation,
) -> Result<String, ServerError> {
    let request = invocation.into_request();
    let response = model.generate_content(model_id, &request).await?;

    if let Some(feedback) = &response.prompt_feedback {
        if let Some(reason) = &feedback.block_reason {
            tracing::warn!(block_reason = %reason, "prompt blocked by provider");
        }
    }

    let text = response.text().ok_or(ServerError::EmptyResponse)?;
    Ok(text.trim().to_owned())
}

// ── Tests ──────────────────────────────────────────────────────────────────────
