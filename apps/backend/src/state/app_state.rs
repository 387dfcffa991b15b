use crate::llm::LlmClient;

use super::security_config::SecurityConfig;

/// Application state containing shared resources.
///
/// Built once at startup and shared read-only across workers; request
/// handlers never mutate it.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Security configuration including JWT settings
    pub security: SecurityConfig,
    /// Client for the external generation API
    pub llm: LlmClient,
}

impl AppState {
    /// Create a new AppState with the given security config and LLM client
    pub fn new(security: SecurityConfig, llm: LlmClient) -> Self {
        Self { security, llm }
    }
}
