use std::env;

use actix_cors::Cors;
use actix_web::http::header;

/// Build CORS middleware with an explicit, credentialed configuration:
/// - Origins come from CORS_ALLOWED_ORIGINS, falling back to the local
///   development frontends
/// - Methods limited to the ones the API uses
/// - Any request header is accepted
pub fn cors_middleware() -> Cors {
    // Comma-separated origins, e.g.:
    // CORS_ALLOWED_ORIGINS=http://localhost:3000,http://localhost:5173
    let allowed_raw = env::var("CORS_ALLOWED_ORIGINS").unwrap_or_default();
    let effective_origins = parse_allowed_origins(&allowed_raw);

    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
        .allow_any_header()
        .supports_credentials()
        .expose_headers(vec![header::HeaderName::from_static("x-trace-id")])
        .max_age(3600);

    for origin in effective_origins {
        cors = cors.allowed_origin(&origin);
    }

    cors
}

/// Parse and lightly validate allowed origins (string-level only); empty
/// and "null" entries are dropped. Falls back to the local development
/// origins when nothing valid was configured.
fn parse_allowed_origins(raw: &str) -> Vec<String> {
    let allowed: Vec<String> = raw
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty() && *s != "null")
        .filter(|s| s.starts_with("http://") || s.starts_with("https://"))
        .map(|s| s.to_string())
        .collect();

    if allowed.is_empty() {
        vec![
            "http://localhost:3000".to_string(),
            "http://127.0.0.1:3000".to_string(),
            "http://localhost:5173".to_string(),
        ]
    } else {
        allowed
    }
}
