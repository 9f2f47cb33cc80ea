mod common;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use common::*;
use product_showcase::app::{self, AppState};
use product_showcase::config::{AppConfig, CatalogConfig, ContactConfig};
use serde_json::{json, Value};
use std::time::Duration;
use tower::ServiceExt;

fn app_for(base_url: String) -> Router {
    let config = AppConfig {
        catalog: CatalogConfig::with_base_url(base_url),
        contact: ContactConfig {
            response_delay_ms: 0,
        },
        ..AppConfig::default()
    };
    let state = AppState::from_config(&config).unwrap();
    app::router(state, Duration::from_secs(10))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_list_products_route() {
    let app = app_for(spawn_upstream(healthy_upstream()).await);

    let (status, body) = send(app, get("/api/products")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true, "data": sample_products() }));
}

#[tokio::test]
async fn test_product_route() {
    let base_url = spawn_upstream(healthy_upstream()).await;

    let (status, body) = send(app_for(base_url.clone()), get("/api/products/1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"], sample_products()[0]);

    let (status, body) = send(app_for(base_url.clone()), get("/api/products/null")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);

    let (status, body) = send(app_for(base_url.clone()), get("/api/products/42")).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(
        body["message"],
        "Failed to load product. Please try again later."
    );

    let (status, body) = send(app_for(base_url), get("/api/products/999")).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(
        body["message"],
        "Failed to load product. Please try again later."
    );
}

#[tokio::test]
async fn test_upstream_down_routes() {
    let base_url = unreachable_base_url().await;

    let (status, body) = send(app_for(base_url.clone()), get("/api/products")).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["success"], false);
    assert_eq!(
        body["message"],
        "Unable to connect to the server. Please check your internet connection."
    );

    let (status, body) = send(app_for(base_url), get("/api/products/ids")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_product_ids_route() {
    let app = app_for(spawn_upstream(healthy_upstream()).await);

    let (status, body) = send(app, get("/api/products/ids")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([{ "id": "1" }, { "id": "2" }]));
}

#[tokio::test]
async fn test_contact_success() {
    let app = app_for(unreachable_base_url().await);

    let (status, body) = send(
        app,
        post_json(
            "/api/contact",
            r#"{"name":"Ann","email":"ann@example.com","subject":"Hi","message":"Hello there"}"#,
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Message sent successfully");
    assert_eq!(
        body["data"],
        json!({ "name": "Ann", "email": "ann@example.com", "subject": "Hi" })
    );
}

#[tokio::test]
async fn test_contact_accepts_body_without_content_type() {
    let app = app_for(unreachable_base_url().await);

    let request = Request::builder()
        .method("POST")
        .uri("/api/contact")
        .body(Body::from(
            r#"{"name":"Ann","email":"ann@example.com","message":"Hi"}"#,
        ))
        .unwrap();
    let (status, body) = send(app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(
        body["data"],
        json!({ "name": "Ann", "email": "ann@example.com" })
    );
}

#[tokio::test]
async fn test_contact_accepts_non_string_values() {
    let base_url = unreachable_base_url().await;

    let (status, body) = send(
        app_for(base_url.clone()),
        post_json(
            "/api/contact",
            r#"{"name":"Ann","email":"ann@example.com","subject":7,"message":"Hi"}"#,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["subject"], 7);

    let (status, body) = send(
        app_for(base_url.clone()),
        post_json(
            "/api/contact",
            r#"{"name":42,"email":"ann@example.com","message":"Hi"}"#,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], 42);

    let (status, body) = send(
        app_for(base_url),
        post_json(
            "/api/contact",
            r#"{"name":0,"email":"ann@example.com","message":"Hi"}"#,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Missing required fields");
}

#[tokio::test]
async fn test_contact_validation() {
    let base_url = unreachable_base_url().await;

    let (status, body) = send(
        app_for(base_url.clone()),
        post_json("/api/contact", r#"{"name":"Ann","email":"ann@example.com"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Missing required fields");

    let (status, body) = send(
        app_for(base_url.clone()),
        post_json(
            "/api/contact",
            r#"{"name":"Ann","email":"not-an-email","message":"Hello"}"#,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid email address");

    let (status, body) = send(app_for(base_url), post_json("/api/contact", "{not json")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body["message"],
        "An error occurred while processing your request"
    );
}

#[tokio::test]
async fn test_health_and_info() {
    let base_url = unreachable_base_url().await;

    let (status, body) = send(app_for(base_url.clone()), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = send(app_for(base_url), get("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "product-showcase");
}
