//! Request / response bodies shared by the three story endpoints.
//!
//! Field names are camelCase on the wire to match the existing front-end.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for `POST /api/chat`, `/api/make-name` and `/api/extension`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    /// The current user prompt. Older clients send it as `query`.
    #[serde(alias = "query")]
    pub question: String,
    /// Optional base64-encoded image (raw or `data:` URL). `/api/chat` only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Previous user prompts, oldest first.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before_question_list: Option<Vec<String>>,
    /// Previous model answers, oldest first; paired with `beforeQuestionList` by index.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before_response_list: Option<Vec<String>>,
    /// Target number of characters to add. `/api/extension` only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension_length: Option<i64>,
}

/// Response body of every story endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ChatResponse {
    /// `false` only for requests rejected before reaching the model.
    pub status: bool,
    pub response: String,
}

impl ChatResponse {
    pub fn ok(response: impl Into<String>) -> Self {
        Self {
            status: true,
            response: response.into(),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            status: false,
            response: message.into(),
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_accepts_camel_case_fields() {
        let req: ChatRequest = serde_json::from_value(json!({
            "question": "continue",
            "beforeQuestionList": ["a"],
            "beforeResponseList": ["x"],
            "extensionLength": 3000
        }))
        .unwrap();
        assert_eq!(req.question, "continue");
        assert_eq!(req.before_question_list.as_deref(), Some(&["a".to_string()][..]));
        assert_eq!(req.extension_length, Some(3000));
        assert!(req.image.is_none());
    }

    #[test]
    fn request_accepts_query_alias() {
        let req: ChatRequest = serde_json::from_value(json!({ "query": "hello" })).unwrap();
        assert_eq!(req.question, "hello");
    }

    #[test]
    fn request_requires_question() {
        assert!(serde_json::from_value::<ChatRequest>(json!({ "image": "AAAA" })).is_err());
    }
}
