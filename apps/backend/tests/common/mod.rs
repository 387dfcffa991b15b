#![allow(dead_code)]

// tests/common/mod.rs
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::header::{HeaderName, CONTENT_TYPE};
use actix_web::{test, web};
use backend::{AppState, AuthClaims, LlmClient, LlmConfig, SecurityConfig, EXPECTED_AUDIENCE};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde_json::Value;

pub const TEST_SECRET: &str = "test_secret_key_for_testing_purposes_only";

// Logging is auto-installed for test binaries
#[ctor::ctor]
fn init_logging() {
    let filter = std::env::var("TEST_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map(tracing_subscriber::EnvFilter::new)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .without_time()
        .try_init()
        .ok();
}

/// LLM config pointing at an unroutable endpoint so tests never perform
/// real network calls; the dispatcher's soft-fail path absorbs the error.
pub fn test_llm_config() -> LlmConfig {
    LlmConfig {
        api_key: Some("test-api-key".to_string()),
        base_url: "http://127.0.0.1:9".to_string(),
        model: "claude-3-5-sonnet-20241022".to_string(),
        max_tokens: 1000,
        temperature: 0.7,
        timeout: Duration::from_secs(1),
    }
}

pub fn test_state_with_secret(secret: &str) -> web::Data<AppState> {
    let security = SecurityConfig::new(secret.as_bytes());
    let llm = LlmClient::new(test_llm_config()).expect("test LLM client should build");
    web::Data::new(AppState::new(security, llm))
}

pub fn test_state() -> web::Data<AppState> {
    test_state_with_secret(TEST_SECRET)
}

fn now_epoch() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before epoch")
        .as_secs() as i64
}

/// Claims as the external identity provider would mint them: correct
/// audience, issued a minute ago, fifteen minutes of validity.
pub fn claims_for(sub: &str, email: &str) -> AuthClaims {
    let iat = now_epoch() - 60;
    AuthClaims {
        sub: sub.to_string(),
        email: email.to_string(),
        role: "authenticated".to_string(),
        aud: EXPECTED_AUDIENCE.to_string(),
        iat,
        exp: iat + 15 * 60,
    }
}

pub fn mint_token(claims: &AuthClaims, secret: &str) -> String {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("token encoding should not fail")
}

/// Validate that a response follows the ProblemDetails structure, carries
/// the expected auth challenge headers, and matches the expected code and
/// detail.
pub async fn assert_problem_details_structure(
    resp: ServiceResponse<BoxBody>,
    expected_status: u16,
    expected_code: &str,
    expected_detail: &str,
) {
    assert_eq!(resp.status().as_u16(), expected_status);

    // Extract headers before consuming the response
    let headers = resp.headers().clone();

    let trace_hdr = HeaderName::from_static("x-trace-id");
    let trace_id = headers
        .get(&trace_hdr)
        .and_then(|v| v.to_str().ok())
        .expect("x-trace-id header should be present and valid UTF-8");
    assert!(!trace_id.is_empty(), "x-trace-id should not be empty");

    // Content-Type may include parameters (e.g., charset)
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(
        content_type.starts_with("application/problem+json"),
        "Content-Type must be application/problem+json (got {content_type})"
    );

    // RFC 7235: 401 must carry WWW-Authenticate: Bearer; no other status does.
    let www_auth = headers.get("WWW-Authenticate");
    if expected_status == 401 {
        assert_eq!(
            www_auth
                .expect("401 responses must have WWW-Authenticate header")
                .to_str()
                .unwrap(),
            "Bearer"
        );
    } else {
        assert!(
            www_auth.is_none(),
            "{expected_status} responses must not have WWW-Authenticate header"
        );
    }

    let body = test::read_body(resp).await;
    let body_str = std::str::from_utf8(&body).expect("Response body should be valid UTF-8");
    let problem_details: Value = serde_json::from_str(body_str).unwrap_or_else(|_| {
        panic!("Failed to parse error body as ProblemDetails. Raw body: {body_str}")
    });

    for key in ["type", "title", "status", "detail", "code", "trace_id"] {
        assert!(
            problem_details.get(key).is_some(),
            "ProblemDetails body should contain `{key}`"
        );
    }

    assert_eq!(problem_details["status"], expected_status);
    assert_eq!(problem_details["code"], expected_code);
    assert_eq!(problem_details["detail"], expected_detail);
}
