use actix_web::{web, App, HttpServer};
use backend::middleware::cors::cors_middleware;
use backend::middleware::request_trace::RequestTrace;
use backend::middleware::structured_logger::StructuredLogger;
use backend::middleware::trace_span::TraceSpan;
use backend::routes;
use backend::state::app_state::AppState;
use backend::state::security_config::SecurityConfig;
use backend::{LlmClient, LlmConfig};

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment:
    // - Docker: Set via docker-compose env_file or docker run --env-file
    // - Local dev: Source env files manually (e.g., set -a; . ./.env; set +a)
    let host = std::env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("BACKEND_PORT")
        .unwrap_or_else(|_| "8000".to_string())
        .parse::<u16>()
        .unwrap_or_else(|_| {
            eprintln!("❌ BACKEND_PORT must be a valid port number");
            std::process::exit(1);
        });

    // A missing JWT secret is deliberately not fatal here: verification
    // reports it as a server fault per request instead of silently passing.
    let security_config = SecurityConfig::from_env();

    let llm = match LlmClient::new(LlmConfig::from_env()) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("❌ Failed to build generation API client: {e}");
            std::process::exit(1);
        }
    };

    let data = web::Data::new(AppState::new(security_config, llm));

    println!("🚀 Starting Memora Backend on http://{}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware())
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
