//! Chat dispatch: prompt selection, identity context injection, and the
//! call out to the generation API.

use serde::{Deserialize, Serialize};

use crate::agents::AgentKind;
use crate::extractors::current_user::CurrentUser;
use crate::llm::LlmClient;

/// Reply used when the API answers successfully but returns no text.
pub const EMPTY_REPLY_FALLBACK: &str = "Sorry, I couldn't process that.";

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub agent_type: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub message: String,
    pub agent: String,
    pub user_id: String,
}

/// Dispatch one chat turn for an already-verified caller.
///
/// Upstream failures are deliberately soft-failed: the response stays
/// success-shaped with a human-readable error description in `message`,
/// never a transport-level 5xx. Auth failures, by contrast, hard-fail
/// before this function is ever reached.
pub async fn dispatch(llm: &LlmClient, user: &CurrentUser, request: ChatRequest) -> ChatResponse {
    let agent = AgentKind::from_selector(request.agent_type.as_deref());

    let system_prompt = format!(
        "{}\n\nYou are speaking with user {} ({}).",
        agent.system_prompt(),
        user.sub,
        user.email
    );

    let message = match llm.complete(&system_prompt, &request.message).await {
        Ok(Some(text)) => text,
        Ok(None) => EMPTY_REPLY_FALLBACK.to_string(),
        Err(e) => {
            tracing::error!(agent = agent.as_str(), error = %e, "generation call failed");
            format!("Error: {e}")
        }
    };

    ChatResponse {
        message,
        agent: agent.as_str().to_string(),
        user_id: user.sub.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{dispatch, ChatRequest};
    use crate::extractors::current_user::CurrentUser;
    use crate::llm::{LlmClient, LlmConfig};

    fn test_user() -> CurrentUser {
        CurrentUser {
            sub: "user-abc".to_string(),
            email: "test@example.com".to_string(),
            role: "authenticated".to_string(),
        }
    }

    #[tokio::test]
    async fn test_upstream_failure_soft_fails_into_response() {
        let llm = LlmClient::new(LlmConfig::for_tests()).unwrap();

        let response = dispatch(
            &llm,
            &test_user(),
            ChatRequest {
                message: "hello".to_string(),
                agent_type: Some("memoir".to_string()),
            },
        )
        .await;

        assert!(!response.message.is_empty());
        assert!(response.message.starts_with("Error:"));
        assert_eq!(response.agent, "memoir");
        assert_eq!(response.user_id, "user-abc");
    }

    #[tokio::test]
    async fn test_unknown_agent_type_dispatches_as_onboarding() {
        let llm = LlmClient::new(LlmConfig::for_tests()).unwrap();

        let unknown = dispatch(
            &llm,
            &test_user(),
            ChatRequest {
                message: "hello".to_string(),
                agent_type: Some("archivist".to_string()),
            },
        )
        .await;
        let absent = dispatch(
            &llm,
            &test_user(),
            ChatRequest {
                message: "hello".to_string(),
                agent_type: None,
            },
        )
        .await;

        assert_eq!(unknown.agent, "onboarding");
        assert_eq!(absent.agent, "onboarding");
    }
}
