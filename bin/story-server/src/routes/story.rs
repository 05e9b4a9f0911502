//! Creative-writing routes: story continuation, name generation, extension.
//!
//! Each handler picks a system instruction and sampling configuration, builds
//! the conversation history from the request, and makes exactly one call to
//! the model (none when an extension request is over the length ceiling).

use std::sync::Arc;
use std::time::Instant;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use story_gemini::Part;
use tracing::{error, info};
use utoipa::OpenApi;

use crate::error::ServerError;
use crate::schemas::story::{ChatRequest, ChatResponse};
use crate::services::generation::{self, Invocation};
use crate::services::history::assemble_history;
use crate::services::image::decode_image;
use crate::services::prompts::{
    self, EXTENSION_DEFAULT_LENGTH, EXTENSION_LIMIT_MESSAGE, EXTENSION_MAX_LENGTH,
    EXTENSION_OUTPUT_TOKENS, NAMING_INSTRUCTION, STORY_INSTRUCTION,
};
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(continue_story, make_name, extend_story),
    components(schemas(ChatRequest, ChatResponse))
)]
pub struct StoryApi;

/// Register story routes.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/chat", post(continue_story))
        .route("/make-name", post(make_name))
        .route("/extension", post(extend_story))
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// Continue or write a story turn (`POST /api/chat`).
///
/// An attached image that cannot be decoded is dropped and the request
/// proceeds text-only.
#[utoipa::path(
    post,
    path = "/api/chat",
    tag = "story",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Story text generated", body = ChatResponse),
        (status = 500, description = "Model or internal error"),
    )
)]
pub async fn continue_story(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ServerError> {
    let mut parts = vec![Part::text(req.question.as_str())];
    if let Some(img) = req.image.as_deref().and_then(decode_image) {
        parts.push(img.into_part());
    }

    let invocation = Invocation {
        instruction: STORY_INSTRUCTION.to_owned(),
        history: assemble_history(
            req.before_question_list.as_deref(),
            req.before_response_list.as_deref(),
        ),
        parts,
        sampling: prompts::sampling(None, state.config.thinking_budget),
    };
    respond(&state, "chat", &req.question, invocation).await
}

/// Generate name candidates (`POST /api/make-name`).
#[utoipa::path(
    post,
    path = "/api/make-name",
    tag = "story",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Name list generated", body = ChatResponse),
        (status = 500, description = "Model or internal error"),
    )
)]
pub async fn make_name(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ServerError> {
    let invocation = Invocation {
        instruction: NAMING_INSTRUCTION.to_owned(),
        history: assemble_history(
            req.before_question_list.as_deref(),
            req.before_response_list.as_deref(),
        ),
        parts: vec![Part::text(req.question.as_str())],
        sampling: prompts::sampling(None, state.config.thinking_budget),
    };
    respond(&state, "make-name", &req.question, invocation).await
}

/// Lengthen existing prose (`POST /api/extension`).
///
/// Requests above the length ceiling are answered with `status: false`
/// without contacting the model.
#[utoipa::path(
    post,
    path = "/api/extension",
    tag = "story",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Extended text, or `status: false` when over the length ceiling", body = ChatResponse),
        (status = 500, description = "Model or internal error"),
    )
)]
pub async fn extend_story(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ServerError> {
    let target = req.extension_length.unwrap_or(EXTENSION_DEFAULT_LENGTH);
    if target > EXTENSION_MAX_LENGTH {
        info!(
            endpoint = "extension",
            extension_length = target,
            "extension length over ceiling; rejected"
        );
        return Ok(Json(ChatResponse::rejected(EXTENSION_LIMIT_MESSAGE)));
    }

    let invocation = Invocation {
        instruction: prompts::extension_instruction(target),
        history: assemble_history(
            req.before_question_list.as_deref(),
            req.before_response_list.as_deref(),
        ),
        parts: vec![Part::text(req.question.as_str())],
        sampling: prompts::sampling(Some(EXTENSION_OUTPUT_TOKENS), state.config.thinking_budget),
    };
    respond(&state, "extension", &req.question, invocation).await
}

// ── Shared skeleton ───────────────────────────────────────────────────────────

/// Log, invoke, time and wrap a single model call.
async fn respond(
    state: &AppState,
    endpoint: &'static str,
    question: &str,
    invocation: Invocation,
) -> Result<Json<ChatResponse>, ServerError> {
    let start = Instant::now();
    info!(endpoint, question, "incoming question");
    if invocation.history.is_empty() {
        info!(endpoint, "no previous conversation");
    } else {
        info!(endpoint, turns = invocation.history.len() / 2, "previous conversation attached");
    }

    match generation::generate(state.model.as_ref(), &state.config.gemini_model, invocation).await {
        Ok(text) => {
            let elapsed = start.elapsed();
            info!(
                endpoint,
                response = %text,
                elapsed_s = %format!("{:.2}", elapsed.as_secs_f64()),
                chars = text.chars().count(),
                "response generated"
            );
            Ok(Json(ChatResponse::ok(text)))
        }
        Err(e) => {
            error!(
                endpoint,
                error = %e,
                elapsed_s = %format!("{:.2}", start.elapsed().as_secs_f64()),
                "generation failed"
            );
            Err(e)
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
