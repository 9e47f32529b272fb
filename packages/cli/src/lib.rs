// ABOUTME: Farmlink server assembly
// ABOUTME: Loads config, builds the router with CORS and tracing, and serves requests

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::Method;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use farmlink_api::ApiState;
use farmlink_requirements::LogNotifier;

pub mod api;
pub mod config;
pub mod form;

#[cfg(test)]
mod tests;

pub use config::{Config, ConfigError};

pub async fn run_server() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    info!(port = config.port, cors_origin = %config.cors_origin, "Starting Farmlink server");

    let state = ApiState::new(config.load_directory()?, Arc::new(LogNotifier));
    info!(
        farmers = state.matcher.directory().len(),
        "Loaded farmer directory"
    );

    // Create CORS layer
    let cors = CorsLayer::new()
        .allow_origin(config.cors_origin.parse::<axum::http::HeaderValue>()?)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    let app = api::create_router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
