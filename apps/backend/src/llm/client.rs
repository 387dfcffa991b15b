use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::config::LlmConfig;

const MESSAGES_PATH: &str = "/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Failures from the generation API.
///
/// These never reach the transport layer as errors: the chat dispatcher
/// converts them into success-shaped responses.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("ANTHROPIC_API_KEY is not configured")]
    MissingApiKey,
    #[error("request to generation API failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("generation API returned {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },
}

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    system: &'a str,
    messages: [WireMessage<'a>; 1],
}

#[derive(Serialize)]
struct WireMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: Option<String>,
}

/// Client for the Anthropic Messages API.
#[derive(Debug, Clone)]
pub struct LlmClient {
    http: HttpClient,
    config: LlmConfig,
}

impl LlmClient {
    pub fn new(config: LlmConfig) -> Result<Self, LlmError> {
        let http = HttpClient::builder().timeout(config.timeout).build()?;
        Ok(Self { http, config })
    }

    /// Request a single completion for one user turn under the given system
    /// prompt. Returns `Ok(None)` when the API answers successfully but with
    /// no text content. One attempt only; failures surface immediately.
    pub async fn complete(
        &self,
        system: &str,
        user_message: &str,
    ) -> Result<Option<String>, LlmError> {
        let api_key = self.config.api_key.as_deref().ok_or(LlmError::MissingApiKey)?;

        let request_body = MessagesRequest {
            model: &self.config.model,
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
            system,
            messages: [WireMessage {
                role: "user",
                content: user_message,
            }],
        };

        let url = format!("{}{}", self.config.base_url, MESSAGES_PATH);
        let resp = self
            .http
            .post(&url)
            .header("x-api-key", api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&request_body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(LlmError::Api { status, body });
        }

        let parsed: MessagesResponse = resp.json().await?;
        Ok(parsed
            .content
            .into_iter()
            .find_map(|block| block.text)
            .filter(|text| !text.is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::{LlmClient, LlmError};
    use crate::llm::LlmConfig;

    #[tokio::test]
    async fn test_missing_api_key_fails_before_any_network_io() {
        let mut config = LlmConfig::for_tests();
        config.api_key = None;
        let client = LlmClient::new(config).unwrap();

        let result = client.complete("system", "hello").await;

        assert!(matches!(result, Err(LlmError::MissingApiKey)));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_surfaces_http_error() {
        let client = LlmClient::new(LlmConfig::for_tests()).unwrap();

        let result = client.complete("system", "hello").await;

        assert!(matches!(result, Err(LlmError::Http(_))));
    }
}
