// ABOUTME: HTTP request handlers for requirement operations
// ABOUTME: Handles requirement submission, farmer matching, and store listing

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::info;

use farmlink_requirements::{Requirement, RequirementCreateInput};

use crate::ApiState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListRequirementsResponse {
    pub message: String,
    pub products: Vec<Requirement>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRequirementResponse {
    pub message: String,
    pub notified_farmers: Vec<String>,
}

/// List every requirement stored since process start, in submission order.
pub async fn list_requirements(State(state): State<ApiState>) -> Json<ListRequirementsResponse> {
    info!("Listing stored product requirements");

    let products = state.store.list().await;

    Json(ListRequirementsResponse {
        message: "All stored product requirements".to_string(),
        products,
    })
}

/// Accept a requirement submission: store it, match it against the
/// farmer directory, and simulate a notification per matched farmer.
/// Always answers 200; a submission that matches nobody is still stored.
pub async fn create_requirement(
    State(state): State<ApiState>,
    Json(input): Json<RequirementCreateInput>,
) -> Json<CreateRequirementResponse> {
    info!(product = %input.product_name, "Received product requirement");

    let requirement = state.store.append(input).await;

    let matched = state.matcher.matches(&requirement.product_name);
    let mut notified_farmers = Vec::with_capacity(matched.len());
    for farmer in matched {
        state.notifier.notify(farmer, &requirement);
        notified_farmers.push(farmer.name.clone());
    }

    info!(
        product = %requirement.product_name,
        notified = notified_farmers.len(),
        "Requirement stored and farmers notified"
    );

    Json(CreateRequirementResponse {
        message: "Requirement submitted successfully".to_string(),
        notified_farmers,
    })
}
