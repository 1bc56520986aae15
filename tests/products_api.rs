use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use rust_decimal::Decimal;
use serde_json::{Value, json};
use tower::ServiceExt;

use inventory_api::{AppState, models::Product, routes, store::InMemoryStore};

fn test_app() -> Router {
    routes::create_router().with_state(AppState {
        store: Arc::new(InMemoryStore::new()),
    })
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    (status, bytes.to_vec())
}

fn product(body: &[u8]) -> Product {
    serde_json::from_slice(body).unwrap()
}

#[tokio::test]
async fn full_crud_lifecycle() {
    let app = test_app();

    let (status, body) = send(
        &app,
        "POST",
        "/api/products",
        Some(json!({ "name": "Widget", "price": 9.99, "quantity": 5 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let created = product(&body);
    assert!(created.id > 0);
    assert_eq!(created.name, "Widget");
    assert_eq!(created.description, None);
    assert_eq!(created.price, Decimal::new(999, 2));
    assert_eq!(created.quantity, 5);

    let uri = format!("/api/products/{}", created.id);

    let (status, body) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(product(&body), created);

    let (status, body) = send(
        &app,
        "PUT",
        &uri,
        Some(json!({ "name": "Widget XL", "price": 12.50, "quantity": 3 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let updated = product(&body);
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Widget XL");
    assert_eq!(updated.price, Decimal::new(1250, 2));
    assert_eq!(updated.quantity, 3);

    let (status, body) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());

    let (status, body) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_empty());
}

#[tokio::test]
async fn list_returns_remaining_records() {
    let app = test_app();

    let mut ids = Vec::new();
    for name in ["A", "B", "C"] {
        let (status, body) = send(
            &app,
            "POST",
            "/api/products",
            Some(json!({ "name": name })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        ids.push(product(&body).id);
    }

    let (status, _) = send(&app, "DELETE", &format!("/api/products/{}", ids[1]), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&app, "GET", "/api/products", None).await;
    assert_eq!(status, StatusCode::OK);
    let listed: Vec<Product> = serde_json::from_slice(&body).unwrap();
    let mut listed_ids: Vec<i32> = listed.iter().map(|p| p.id).collect();
    listed_ids.sort();
    assert_eq!(listed_ids, vec![ids[0], ids[2]]);
}

#[tokio::test]
async fn missing_ids_produce_empty_404s() {
    let app = test_app();

    let (status, body) = send(&app, "GET", "/api/products/42", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_empty());

    let (status, body) = send(
        &app,
        "PUT",
        "/api/products/42",
        Some(json!({ "name": "Ghost" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_empty());

    let (status, body) = send(&app, "DELETE", "/api/products/42", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_empty());

    // the failed update and delete left nothing behind
    let (status, body) = send(&app, "GET", "/api/products", None).await;
    assert_eq!(status, StatusCode::OK);
    let listed: Vec<Product> = serde_json::from_slice(&body).unwrap();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn create_ignores_client_supplied_id() {
    let app = test_app();

    let (status, body) = send(
        &app,
        "POST",
        "/api/products",
        Some(json!({ "id": 999, "name": "Widget" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let created = product(&body);
    assert_ne!(created.id, 999);

    let (status, _) = send(&app, "GET", "/api/products/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_applies_field_defaults() {
    let app = test_app();

    let (status, body) = send(&app, "POST", "/api/products", Some(json!({ "name": "Bare" }))).await;
    assert_eq!(status, StatusCode::CREATED);
    let created = product(&body);
    assert_eq!(created.description, None);
    assert_eq!(created.price, Decimal::ZERO);
    assert_eq!(created.quantity, 0);
}

#[tokio::test]
async fn price_accepts_string_input() {
    let app = test_app();

    let (status, body) = send(
        &app,
        "POST",
        "/api/products",
        Some(json!({ "name": "Widget", "price": "9.99" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(product(&body).price, Decimal::new(999, 2));
}

#[tokio::test]
async fn malformed_id_is_a_client_error() {
    let app = test_app();

    let (status, _) = send(&app, "GET", "/api/products/not-a-number", None).await;
    assert!(status.is_client_error());

    let (status, _) = send(&app, "DELETE", "/api/products/not-a-number", None).await;
    assert!(status.is_client_error());
}

#[tokio::test]
async fn malformed_body_is_a_client_error() {
    let app = test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/api/products")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{ not json"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert!(response.status().is_client_error());

    // a body without the required name field is rejected the same way
    let (status, _) = send(
        &app,
        "POST",
        "/api/products",
        Some(json!({ "price": 1.00 })),
    )
    .await;
    assert!(status.is_client_error());
}

#[tokio::test]
async fn health_endpoints_respond() {
    let app = test_app();

    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    let value: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value["status"], "ok");

    let (status, body) = send(&app, "GET", "/health/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    let value: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value["status"], "ready");
}
