#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod agents;
pub mod auth;
pub mod error;
pub mod extractors;
pub mod llm;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;
pub mod trace_ctx;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use agents::AgentKind;
pub use auth::claims::AuthClaims;
pub use auth::jwt::{verify_access_token, EXPECTED_AUDIENCE};
pub use error::AppError;
pub use extractors::auth_token::AuthToken;
pub use extractors::current_user::CurrentUser;
pub use llm::{LlmClient, LlmConfig, LlmError};
pub use middleware::cors::cors_middleware;
pub use middleware::request_trace::RequestTrace;
pub use middleware::structured_logger::StructuredLogger;
pub use middleware::trace_span::TraceSpan;
pub use state::app_state::AppState;
pub use state::security_config::SecurityConfig;

// Prelude for test convenience
pub mod prelude {
    pub use super::agents::*;
    pub use super::auth::jwt::*;
    pub use super::error::*;
    pub use super::extractors::*;
    pub use super::llm::*;
    pub use super::middleware::*;
    pub use super::state::*;
}

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
