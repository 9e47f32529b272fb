// ABOUTME: Router assembly for the Farmlink server
// ABOUTME: Mounts the form page, health endpoints, and requirements API

use axum::{routing::get, Router};

use farmlink_api::ApiState;

pub mod health;

pub fn create_router(state: ApiState) -> Router {
    Router::new()
        .route("/", get(crate::form::serve_form))
        .route("/api/health", get(health::health_check))
        .nest(
            "/api/requirements",
            farmlink_api::create_requirements_router(),
        )
        .with_state(state)
}
