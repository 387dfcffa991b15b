use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
const DEFAULT_MODEL: &str = "claude-3-5-sonnet-20241022";
const DEFAULT_MAX_TOKENS: u32 = 1000;
const DEFAULT_TEMPERATURE: f32 = 0.7;
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the external generation API.
///
/// Generation parameters are process-wide constants: callers select an agent
/// type, never sampling settings.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// API credential (`ANTHROPIC_API_KEY`). When absent every generation
    /// call fails and the dispatcher soft-fails the response.
    pub api_key: Option<String>,
    /// Endpoint base URL (`ANTHROPIC_BASE_URL`). Overridable for tests.
    pub base_url: String,
    /// Model identifier (`ANTHROPIC_MODEL`).
    pub model: String,
    /// Maximum output length (`ANTHROPIC_MAX_TOKENS`).
    pub max_tokens: u32,
    /// Sampling temperature (`ANTHROPIC_TEMPERATURE`).
    pub temperature: f32,
    /// Per-request timeout (`ANTHROPIC_TIMEOUT_SECS`).
    pub timeout: Duration,
}

impl LlmConfig {
    pub fn from_env() -> Self {
        let api_key = std::env::var("ANTHROPIC_API_KEY")
            .ok()
            .filter(|v| !v.is_empty());
        if api_key.is_none() {
            tracing::warn!("ANTHROPIC_API_KEY is not set; generation calls will fail");
        }

        let base_url =
            std::env::var("ANTHROPIC_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let model = std::env::var("ANTHROPIC_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let max_tokens = std::env::var("ANTHROPIC_MAX_TOKENS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MAX_TOKENS);

        let temperature = std::env::var("ANTHROPIC_TEMPERATURE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TEMPERATURE);

        let timeout_secs = std::env::var("ANTHROPIC_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            api_key,
            base_url,
            model,
            max_tokens,
            temperature,
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    /// Config pointing at an unroutable endpoint so tests never leave the host.
    #[cfg(test)]
    pub fn for_tests() -> Self {
        Self {
            api_key: Some("test-api-key".to_string()),
            base_url: "http://127.0.0.1:9".to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            timeout: Duration::from_secs(1),
        }
    }
}
