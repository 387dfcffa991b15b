use actix_web::{web, HttpResponse, Result};

use crate::error::AppError;
use crate::extractors::CurrentUser;
use crate::services::chat::{dispatch, ChatRequest};
use crate::state::app_state::AppState;

/// Chat with an agent. Auth failures reject the request before dispatch;
/// generation failures come back inside a 200 (see `services::chat`).
async fn chat(
    user: CurrentUser,
    body: web::Json<ChatRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let response = dispatch(&app_state.llm, &user, body.into_inner()).await;

    Ok(HttpResponse::Ok().json(response))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/chat", web::post().to(chat));
}
