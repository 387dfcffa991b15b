use actix_web::{web, HttpResponse, Result};
use serde::Serialize;

use crate::{error::AppError, extractors::CurrentUser};

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub user_id: String,
    pub email: String,
    pub role: String,
    pub onboarding_completed: bool,
}

/// Protected endpoint that returns the caller's identity
async fn me(auth: CurrentUser) -> Result<HttpResponse, AppError> {
    let response = MeResponse {
        user_id: auth.sub,
        email: auth.email,
        role: auth.role,
        // No profile store yet; onboarding status is a fixed placeholder.
        onboarding_completed: false,
    };

    Ok(HttpResponse::Ok().json(response))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/me", web::get().to(me));
}
