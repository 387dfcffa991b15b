use actix_web::web;

pub mod chat;
pub mod health;
pub mod me;

/// Configure application routes.
///
/// The same wiring serves production (`main.rs` adds CORS and tracing
/// middleware around it) and the actix test harness.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes)
        .configure(chat::configure_routes)
        .configure(me::configure_routes);
}
