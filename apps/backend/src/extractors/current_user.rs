use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use serde::{Deserialize, Serialize};

use crate::auth::jwt::verify_access_token;
use crate::error::AppError;
use crate::extractors::auth_token::AuthToken;
use crate::state::app_state::AppState;

/// Verified caller identity derived from the bearer token.
///
/// Constructed only after signature, expiry and audience checks all pass;
/// there is no partially-trusted variant of this type.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CurrentUser {
    pub sub: String,
    pub email: String,
    pub role: String,
}

impl FromRequest for CurrentUser {
    type Error = AppError;
    type Future = std::pin::Pin<Box<dyn std::future::Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let token = AuthToken::extract(&req).await?;

            let app_state = req
                .app_data::<web::Data<AppState>>()
                .ok_or_else(|| AppError::internal("AppState not available".to_string()))?;

            let claims = verify_access_token(&token.token, &app_state.security)?;

            Ok(CurrentUser {
                sub: claims.sub,
                email: claims.email,
                role: claims.role,
            })
        })
    }
}
