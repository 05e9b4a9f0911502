//! Request-independent building blocks used by the story routes.

pub mod generation;
pub mod history;
pub mod image;
pub mod prompts;

#[cfg(test)]
pub mod testing {
    //! In-process stand-in for the Gemini API.

    use std::sync::Mutex;

    use async_trait::async_trait;
    use story_gemini::{
        Candidate, Content, GeminiError, GenerateContent, GenerateContentRequest,
        GenerateContentResponse, Part, Role,
    };

    /// What the fake answers with on every call.
    #[derive(Debug, Clone)]
    pub enum Reply {
        Text(String),
        Fragments(Vec<String>),
        NoCandidates,
        NoParts,
        ApiError(u16, String),
    }

    /// Records every request and answers with a fixed [`Reply`].
    pub struct FakeModel {
        reply: Reply,
        calls: Mutex<Vec<(String, GenerateContentRequest)>>,
    }

    impl FakeModel {
        pub fn new(reply: Reply) -> Self {
            Self {
                reply,
                calls: Mutex::new(Vec::new()),
            }
        }

        pub fn calls(&self) -> Vec<(String, GenerateContentRequest)> {
            self.calls.lock().unwrap().clone()
        }
    }

    fn candidate(parts: Vec<Part>) -> GenerateContentResponse {
        GenerateContentResponse {
            candidates: vec![Candidate {
                content: Some(Content::with_parts(Role::Model, parts)),
                finish_reason: Some("STOP".into()),
                index: Some(0),
            }],
            ..Default::default()
        }
    }

    #[async_trait]
    impl GenerateContent for FakeModel {
        async fn generate_content(
            &self,
            model: &str,
            request: &GenerateContentRequest,
        ) -> Result<GenerateContentResponse, GeminiError> {
            self.calls
                .lock()
                .unwrap()
                .push((model.to_owned(), request.clone()));

            match &self.reply {
                Reply::Text(t) => Ok(candidate(vec![Part::text(t.as_str())])),
                Reply::Fragments(fs) => Ok(candidate(fs.iter().map(|f| Part::text(f.as_str())).collect())),
                Reply::NoCandidates => Ok(GenerateContentResponse::default()),
                Reply::NoParts => Ok(candidate(vec![])),
                Reply::ApiError(status, message) => Err(GeminiError::Api {
                    status: *status,
                    message: message.clone(),
                }),
            }
        }
    }
}
