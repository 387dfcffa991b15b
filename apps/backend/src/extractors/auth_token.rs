use actix_web::{dev::Payload, http::header, FromRequest, HttpRequest};
use serde::{Deserialize, Serialize};

use crate::AppError;

/// Bearer credential extracted from the Authorization header.
///
/// Classification of failures:
/// - No header, empty value, or a malformed `Bearer` clause → 401
///   (`UnauthorizedMissingBearer`)
/// - A non-Bearer authentication scheme → 403 (`ForbiddenScheme`)
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AuthToken {
    pub token: String,
}

impl FromRequest for AuthToken {
    type Error = AppError;
    type Future = std::pin::Pin<Box<dyn std::future::Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let auth_header = req
                .headers()
                .get(header::AUTHORIZATION)
                .ok_or_else(AppError::unauthorized_missing_bearer)?;

            let auth_value = auth_header
                .to_str()
                .map_err(|_| AppError::unauthorized_missing_bearer())?;

            // Parse "Bearer <token>" format
            let parts: Vec<&str> = auth_value.split_whitespace().collect();
            match parts.as_slice() {
                ["Bearer", token] if !token.is_empty() => Ok(AuthToken {
                    token: (*token).to_string(),
                }),
                [scheme, ..] if *scheme != "Bearer" => Err(AppError::forbidden_scheme()),
                _ => Err(AppError::unauthorized_missing_bearer()),
            }
        })
    }
}
