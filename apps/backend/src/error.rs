use actix_web::error::ResponseError;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;
use thiserror::Error;

use crate::trace_ctx;

#[derive(Serialize)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub type_: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    pub code: String,
    pub trace_id: String,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("UnauthorizedMissingBearer")]
    UnauthorizedMissingBearer,
    #[error("UnauthorizedInvalidJwt")]
    UnauthorizedInvalidJwt,
    #[error("UnauthorizedExpiredJwt")]
    UnauthorizedExpiredJwt,
    #[error("UnauthorizedInvalidAudience")]
    UnauthorizedInvalidAudience,
    #[error("ForbiddenScheme")]
    ForbiddenScheme,
    #[error("Internal error: {detail}")]
    Internal { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl AppError {
    /// Helper method to extract error code from any error variant
    fn code(&self) -> String {
        match self {
            AppError::UnauthorizedMissingBearer => "UNAUTHORIZED_MISSING_BEARER".to_string(),
            AppError::UnauthorizedInvalidJwt => "UNAUTHORIZED_INVALID_JWT".to_string(),
            AppError::UnauthorizedExpiredJwt => "UNAUTHORIZED_EXPIRED_JWT".to_string(),
            AppError::UnauthorizedInvalidAudience => {
                "UNAUTHORIZED_INVALID_AUDIENCE".to_string()
            }
            AppError::ForbiddenScheme => "FORBIDDEN_SCHEME".to_string(),
            AppError::Internal { .. } => "INTERNAL".to_string(),
            AppError::Config { .. } => "CONFIG_ERROR".to_string(),
        }
    }

    /// Helper method to extract error detail from any error variant
    fn detail(&self) -> String {
        match self {
            AppError::UnauthorizedMissingBearer => "Missing or malformed Bearer token".to_string(),
            AppError::UnauthorizedInvalidJwt => "Invalid authentication token".to_string(),
            AppError::UnauthorizedExpiredJwt => "Token expired".to_string(),
            AppError::UnauthorizedInvalidAudience => {
                "Token audience is not valid for this service".to_string()
            }
            AppError::ForbiddenScheme => {
                "Invalid authentication scheme. Use Bearer token.".to_string()
            }
            AppError::Internal { detail, .. } => detail.clone(),
            AppError::Config { detail, .. } => detail.clone(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::UnauthorizedMissingBearer => StatusCode::UNAUTHORIZED,
            AppError::UnauthorizedInvalidJwt => StatusCode::UNAUTHORIZED,
            AppError::UnauthorizedExpiredJwt => StatusCode::UNAUTHORIZED,
            AppError::UnauthorizedInvalidAudience => StatusCode::UNAUTHORIZED,
            AppError::ForbiddenScheme => StatusCode::FORBIDDEN,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn unauthorized_missing_bearer() -> Self {
        Self::UnauthorizedMissingBearer
    }

    pub fn unauthorized_invalid_jwt() -> Self {
        Self::UnauthorizedInvalidJwt
    }

    pub fn unauthorized_expired_jwt() -> Self {
        Self::UnauthorizedExpiredJwt
    }

    pub fn unauthorized_invalid_audience() -> Self {
        Self::UnauthorizedInvalidAudience
    }

    pub fn forbidden_scheme() -> Self {
        Self::ForbiddenScheme
    }

    pub fn internal(detail: String) -> Self {
        Self::Internal { detail }
    }

    pub fn config(detail: String) -> Self {
        Self::Config { detail }
    }

    fn humanize_code(code: &str) -> String {
        code.split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    None => String::new(),
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl From<std::env::VarError> for AppError {
    fn from(e: std::env::VarError) -> Self {
        AppError::internal(format!("env var error: {e}"))
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status();
        let code = self.code();
        let detail = self.detail();
        let trace_id = trace_ctx::trace_id();

        let problem_details = ProblemDetails {
            type_: format!("https://memora.app/errors/{}", code.to_uppercase()),
            title: Self::humanize_code(&code),
            status: status.as_u16(),
            detail,
            code,
            trace_id: trace_id.clone(),
        };

        let mut builder = HttpResponse::build(status);
        builder
            .content_type("application/problem+json")
            .insert_header(("x-trace-id", trace_id));

        // RFC 7235: every 401 carries a bearer challenge.
        if status == StatusCode::UNAUTHORIZED {
            builder.insert_header(("WWW-Authenticate", "Bearer"));
        }

        builder.json(problem_details)
    }
}
