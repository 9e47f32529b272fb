// ABOUTME: HTTP API layer for Farmlink providing REST endpoints and routing
// ABOUTME: Wires the requirement store, farmer matcher, and notifier into axum handlers

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use farmlink_requirements::{FarmerDirectory, FarmerMatcher, Notifier, RequirementStore};

pub mod requirements_handlers;

/// Shared state handed to every request handler. Built once at process
/// start; the store and matcher are explicit dependencies rather than
/// ambient globals so they can be swapped without touching handlers.
#[derive(Clone)]
pub struct ApiState {
    pub store: RequirementStore,
    pub matcher: Arc<FarmerMatcher>,
    pub notifier: Arc<dyn Notifier>,
}

impl ApiState {
    pub fn new(directory: FarmerDirectory, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            store: RequirementStore::new(),
            matcher: Arc::new(FarmerMatcher::new(directory)),
            notifier,
        }
    }
}

/// Creates the requirements API router
pub fn create_requirements_router() -> Router<ApiState> {
    Router::new()
        .route("/", get(requirements_handlers::list_requirements))
        .route("/", post(requirements_handlers::create_requirement))
}
