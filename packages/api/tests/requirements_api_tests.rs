// ABOUTME: Integration tests for the requirements API
// ABOUTME: Exercises submission, matching, notification, and listing over in-process HTTP

use std::sync::Arc;

use axum::Router;
use axum_test::TestServer;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use farmlink_api::{create_requirements_router, ApiState};
use farmlink_requirements::test_utils::RecordingNotifier;
use farmlink_requirements::{FarmerDirectory, FarmerRecord};

fn directory() -> FarmerDirectory {
    let record = |name: &str, product: &str| FarmerRecord {
        name: name.to_string(),
        product: product.to_string(),
        email: format!("{}@farm.example", name.to_lowercase()),
    };

    FarmerDirectory::new(vec![
        record("Alice", "tomato"),
        record("Ben", "corn"),
        record("Dana", "sweet corn"),
    ])
}

fn test_server() -> (TestServer, Arc<RecordingNotifier>) {
    let notifier = Arc::new(RecordingNotifier::new());
    let state = ApiState::new(directory(), notifier.clone());

    let app = Router::new()
        .nest("/api/requirements", create_requirements_router())
        .with_state(state);

    (TestServer::new(app).unwrap(), notifier)
}

fn submission(product_name: &str) -> Value {
    json!({
        "productName": product_name,
        "quantity": "25",
        "deliveryDate": "2026-09-15",
        "notes": "",
    })
}

#[tokio::test]
async fn submitting_tomatoes_notifies_alice() {
    let (server, notifier) = test_server();

    let response = server
        .post("/api/requirements")
        .json(&submission("Tomatoes"))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["notifiedFarmers"], json!(["Alice"]));
    assert_eq!(notifier.notified(), vec!["Alice"]);
}

#[tokio::test]
async fn unmatched_product_notifies_nobody() {
    let (server, notifier) = test_server();

    let response = server
        .post("/api/requirements")
        .json(&submission("Xylophone"))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["notifiedFarmers"], json!([]));
    assert!(notifier.notified().is_empty());
}

#[tokio::test]
async fn all_matching_farmers_are_notified_in_directory_order() {
    let (server, notifier) = test_server();

    let response = server
        .post("/api/requirements")
        .json(&submission("Organic Sweet Corn"))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["notifiedFarmers"], json!(["Ben", "Dana"]));
    assert_eq!(notifier.notified(), vec!["Ben", "Dana"]);
}

#[tokio::test]
async fn listing_returns_submissions_in_order() {
    let (server, _notifier) = test_server();

    for product in ["Tomatoes", "Corn", "Rice"] {
        server
            .post("/api/requirements")
            .json(&submission(product))
            .await
            .assert_status_ok();
    }

    let response = server.get("/api/requirements").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert!(body["message"].is_string());

    let products = body["products"].as_array().unwrap();
    assert_eq!(products.len(), 3);

    let names: Vec<&str> = products
        .iter()
        .map(|p| p["productName"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Tomatoes", "Corn", "Rice"]);
    assert!(products[0]["createdAt"].is_string());
}

#[tokio::test]
async fn listing_starts_empty() {
    let (server, _notifier) = test_server();

    let response = server.get("/api/requirements").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["products"], json!([]));
}

#[tokio::test]
async fn missing_fields_are_stored_and_match_nothing() {
    let (server, notifier) = test_server();

    let response = server.post("/api/requirements").json(&json!({})).await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["notifiedFarmers"], json!([]));
    assert!(notifier.notified().is_empty());

    let listing: Value = server.get("/api/requirements").await.json();
    assert_eq!(listing["products"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn each_successful_post_grows_the_store_by_one() {
    let (server, _notifier) = test_server();

    for n in 1..=4 {
        server
            .post("/api/requirements")
            .json(&submission("Tomatoes"))
            .await
            .assert_status_ok();

        let listing: Value = server.get("/api/requirements").await.json();
        assert_eq!(listing["products"].as_array().unwrap().len(), n);
    }
}
