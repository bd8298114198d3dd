//! # Formula Place API Server
//!
//! The main entry point for the Actix-web HTTP server.

use actix_web::middleware::NormalizePath;
use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod state;
mod telemetry;

use config::AppConfig;
use state::AppState;
use telemetry::TelemetryConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    tracing::info!(
        "Starting Formula Place API Server on {}:{}",
        config.host,
        config.port
    );

    // Build application state; the pool lives until the server stops.
    let state = AppState::new(&config.database).await.map_err(|e| {
        tracing::error!("Startup failed: {}", e);
        std::io::Error::other(e)
    })?;

    let origins = config.cors_origins.clone();
    let app_state = state.clone();

    // SIGINT/SIGTERM stop accepting and drain in-flight requests.
    HttpServer::new(move || {
        App::new()
            .wrap(middleware::cors::cors(&origins))
            .wrap(NormalizePath::trim())
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(app_state.clone()))
            .configure(handlers::configure_routes)
    })
    .shutdown_timeout(30)
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    state.shutdown().await;
    tracing::info!("Server exited properly");

    Ok(())
}
