//! Server configuration, loaded from environment variables at startup.

use std::path::Path;

use thiserror::Error;

use crate::services::prompts::DEFAULT_MODEL;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The provider credential is the only setting without a default.
    #[error("GEMINI_API_KEY environment variable is not set")]
    MissingApiKey,

    #[error("STORY_THINKING_BUDGET must be an integer, got '{0}'")]
    InvalidThinkingBudget(String),

    #[error("failed to load env file: {0}")]
    EnvFile(String),
}

/// Runtime configuration for story-server.
///
/// Everything except the Gemini API key has a default.
#[derive(Clone)]
pub struct Config {
    /// TCP address to bind (default: `"0.0.0.0:8000"`).
    pub bind_address: String,

    /// Gemini credential (`GEMINI_API_KEY`). Required.
    pub gemini_api_key: String,

    /// Model identifier sent to the provider.
    pub gemini_model: String,

    /// Provider base URL; override to point at a proxy or a local fake.
    pub gemini_base_url: String,

    /// Optional thinking budget attached to every generation request.
    /// `0` disables thinking on models that support it.
    pub thinking_budget: Option<i32>,

    /// `tracing` filter string, e.g. `"info"` or `"debug,tower_http=warn"`.
    pub log_level: String,

    /// When `true`, emit log records as newline-delimited JSON.
    pub log_json: bool,

    /// Comma-separated list of allowed CORS origins; `None` means wildcard.
    pub cors_allowed_origins: Option<String>,

    /// Mount Swagger UI at `/swagger-ui`.
    pub enable_swagger: bool,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("bind_address", &self.bind_address)
            .field("gemini_api_key", &"<redacted>")
            .field("gemini_model", &self.gemini_model)
            .field("gemini_base_url", &self.gemini_base_url)
            .field("thinking_budget", &self.thinking_budget)
            .field("log_level", &self.log_level)
            .field("log_json", &self.log_json)
            .field("cors_allowed_origins", &self.cors_allowed_origins)
            .field("enable_swagger", &self.enable_swagger)
            .finish()
    }
}

impl Config {
    /// Build [`Config`] from the process environment, after merging the
    /// nearest `.env` file (working directory or a parent) when one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_file(None)
    }

    /// Like [`Config::from_env`], but merges `path` instead of searching for
    /// `.env`. Variables already set in the process take precedence over the
    /// file; a missing file is not an error.
    pub fn from_env_file(path: Option<&Path>) -> Result<Self, ConfigError> {
        let loaded = match path {
            Some(p) => dotenvy::from_path(p),
            None => dotenvy::dotenv().map(|_| ()),
        };
        if let Err(e) = loaded {
            if !e.not_found() {
                return Err(ConfigError::EnvFile(e.to_string()));
            }
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build [`Config`] from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let gemini_api_key = lookup("GEMINI_API_KEY")
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        Ok(Self {
            bind_address: env_or(&lookup, "STORY_BIND", "0.0.0.0:8000"),
            gemini_api_key,
            gemini_model: env_or(&lookup, "STORY_GEMINI_MODEL", DEFAULT_MODEL),
            gemini_base_url: env_or(
                &lookup,
                "STORY_GEMINI_BASE_URL",
                story_gemini::DEFAULT_BASE_URL,
            ),
            thinking_budget: parse_thinking_budget(lookup("STORY_THINKING_BUDGET"))?,
            log_level: env_or(&lookup, "STORY_LOG", "info"),
            log_json: parse_bool(&lookup, "STORY_LOG_JSON", false),
            cors_allowed_origins: lookup("STORY_CORS_ORIGINS").filter(|v| !v.trim().is_empty()),
            enable_swagger: parse_bool(&lookup, "STORY_ENABLE_SWAGGER", true),
        })
    }
}

// ── private helpers ──────────────────────────────────────────────────────────

fn env_or(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    lookup(key).unwrap_or_else(|| default.to_owned())
}

fn parse_bool(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: bool) -> bool {
    lookup(key)
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(default)
}

fn parse_thinking_budget(raw: Option<String>) -> Result<Option<i32>, ConfigError> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) => v
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidThinkingBudget(v.to_owned())),
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn missing_api_key_is_fatal() {
        let err = Config::from_lookup(lookup_from(&[])).unwrap_err();
        assert_eq!(err, ConfigError::MissingApiKey);
    }

    #[test]
    fn blank_api_key_is_fatal() {
        let err = Config::from_lookup(lookup_from(&[("GEMINI_API_KEY", "   ")])).unwrap_err();
        assert_eq!(err, ConfigError::MissingApiKey);
    }

    #[test]
    fn defaults_apply_when_only_key_is_set() {
        let cfg = Config::from_lookup(lookup_from(&[("GEMINI_API_KEY", "k")])).unwrap();
        assert_eq!(cfg.gemini_api_key, "k");
        assert_eq!(cfg.bind_address, "0.0.0.0:8000");
        assert_eq!(cfg.gemini_model, "gemini-2.5-flash");
        assert_eq!(cfg.thinking_budget, None);
        assert!(cfg.enable_swagger);
        assert!(!cfg.log_json);
        assert!(cfg.cors_allowed_origins.is_none());
    }

    #[test]
    fn overrides_are_read() {
        let cfg = Config::from_lookup(lookup_from(&[
            ("GEMINI_API_KEY", "k"),
            ("STORY_BIND", "127.0.0.1:9000"),
            ("STORY_THINKING_BUDGET", "0"),
            ("STORY_LOG_JSON", "TRUE"),
            ("STORY_ENABLE_SWAGGER", "false"),
        ]))
        .unwrap();
        assert_eq!(cfg.bind_address, "127.0.0.1:9000");
        assert_eq!(cfg.thinking_budget, Some(0));
        assert!(cfg.log_json);
        assert!(!cfg.enable_swagger);
    }

    #[test]
    fn debug_redacts_key() {
        let cfg = Config::from_lookup(lookup_from(&[("GEMINI_API_KEY", "secret-key")])).unwrap();
        assert!(!format!("{cfg:?}").contains("secret-key"));
    }

    #[test]
    fn unparseable_thinking_budget_is_fatal() {
        let err = Config::from_lookup(lookup_from(&[
            ("GEMINI_API_KEY", "k"),
            ("STORY_THINKING_BUDGET", "off"),
        ]))
        .unwrap_err();
        assert_eq!(err, ConfigError::InvalidThinkingBudget("off".into()));
    }

    #[test]
    fn blank_thinking_budget_is_unset() {
        let cfg = Config::from_lookup(lookup_from(&[
            ("GEMINI_API_KEY", "k"),
            ("STORY_THINKING_BUDGET", "  "),
        ]))
        .unwrap();
        assert_eq!(cfg.thinking_budget, None);
    }

    #[test]
    fn env_file_supplies_missing_settings() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "GEMINI_API_KEY=key-from-env-file").unwrap();
        writeln!(file, "STORY_CORS_ORIGINS=https://env-file.example").unwrap();

        let cfg = Config::from_env_file(Some(file.path())).unwrap();
        assert!(!cfg.gemini_api_key.is_empty());
        assert_eq!(
            cfg.cors_allowed_origins.as_deref(),
            Some("https://env-file.example")
        );
    }

    #[test]
    fn malformed_env_file_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "this is not valid").unwrap();

        let err = Config::from_env_file(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::EnvFile(_)));
    }
}
