//! Command-line interface.

use clap::{Parser, Subcommand};
use story_gemini::{Content, GenerateContentRequest};
use tracing::info;

use crate::error::ServerError;
use crate::services::prompts;
use crate::state::AppState;

const PROBE_PROMPT: &str =
    "API 테스트야. 너는 정상적으로 API를 받고 있다면 너의 이름과 정보를 알려줘";

#[derive(Debug, Parser)]
#[command(name = "story-server", version, about = "Creative-writing assistant backend")]
pub struct Cli {
    /// Listen address; overrides STORY_BIND.
    #[arg(long)]
    pub bind: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Send one prompt to the configured model and print the reply.
    Probe {
        #[arg(long, default_value = PROBE_PROMPT)]
        prompt: String,
    },
}

/// Check credentials and connectivity with a single bare request: no system
/// instruction, no history, thinking disabled.
pub async fn probe(state: &AppState, prompt: &str) -> Result<String, ServerError> {
    let request = GenerateContentRequest {
        system_instruction: None,
        contents: vec![Content::user(prompt)],
        generation_config: Some(prompts::sampling(None, Some(0))),
    };
    info!(model = %state.config.gemini_model, "probing model provider");
    let response = state
        .model
        .generate_content(&state.config.gemini_model, &request)
        .await?;
    let text = response.text().ok_or(ServerError::EmptyResponse)?;
    Ok(text.trim().to_owned())
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::Config;
    use crate::services::testing::{FakeModel, Reply};
    use std::sync::Arc;

    #[test]
    fn parses_probe_with_default_prompt() {
        let cli = Cli::try_parse_from(["story-server", "probe"]).unwrap();
        match cli.command {
            Some(Command::Probe { prompt }) => assert_eq!(prompt, PROBE_PROMPT),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_bind_override_without_subcommand() {
        let cli = Cli::try_parse_from(["story-server", "--bind", "127.0.0.1:1234"]).unwrap();
        assert_eq!(cli.bind.as_deref(), Some("127.0.0.1:1234"));
        assert!(cli.command.is_none());
    }

    #[tokio::test]
    async fn probe_sends_bare_request_with_thinking_disabled() {
        let fake = Arc::new(FakeModel::new(Reply::Text(" I am Gemini. ".into())));
        let config = Config::from_lookup(|key| (key == "GEMINI_API_KEY").then(|| "k".to_owned()))
            .unwrap();
        let state = AppState {
            config: Arc::new(config),
            model: fake.clone(),
        };

        let reply = probe(&state, "ping").await.unwrap();
        assert_eq!(reply, "I am Gemini.");

        let (_, sent) = &fake.calls()[0];
        assert!(sent.system_instruction.is_none());
        assert_eq!(sent.contents, vec![Content::user("ping")]);
        let thinking = sent.generation_config.as_ref().unwrap().thinking_config;
        assert_eq!(thinking.map(|t| t.thinking_budget), Some(0));
    }
}
