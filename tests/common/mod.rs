//! 测试用的上游商品目录模拟服务

#![allow(dead_code)]

use axum::{extract::Path, http::StatusCode, routing::get, Router};
use serde_json::{json, Value};
use std::time::Duration;
use tokio::net::TcpListener;

pub fn sample_products() -> Value {
    json!([
        {
            "id": 1,
            "title": "A",
            "price": 9.99,
            "description": "First product",
            "category": "electronics",
            "image": "https://example.com/img/1.jpg",
            "rating": { "rate": 4.1, "count": 259 }
        },
        {
            "id": 2,
            "title": "Mens Casual Premium Slim Fit T-Shirts",
            "price": 22.3,
            "description": "Slim-fitting style",
            "category": "men's clothing",
            "image": "https://example.com/img/2.jpg",
            "rating": { "rate": 0.0, "count": 0 }
        }
    ])
}

async fn product_by_id(Path(id): Path<String>) -> (StatusCode, String) {
    let products = sample_products();
    let found = products
        .as_array()
        .into_iter()
        .flatten()
        .find(|p| p["id"].to_string() == id)
        .cloned();

    match (id.as_str(), found) {
        (_, Some(product)) => (StatusCode::OK, product.to_string()),
        // 真实上游对不存在的数字 ID 返回空响应体
        ("42", None) => (StatusCode::OK, String::new()),
        ("null", None) => (StatusCode::OK, "null".to_string()),
        ("garbled", None) => (StatusCode::OK, "{\"id\": ".to_string()),
        _ => (StatusCode::NOT_FOUND, String::new()),
    }
}

/// 正常工作的上游
pub fn healthy_upstream() -> Router {
    Router::new()
        .route(
            "/products",
            get(|| async { (StatusCode::OK, sample_products().to_string()) }),
        )
        .route("/products/:id", get(product_by_id))
}

/// 所有请求都返回 500 的上游
pub fn failing_upstream() -> Router {
    Router::new()
        .route(
            "/products",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        )
        .route(
            "/products/:id",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        )
}

/// 返回非 JSON 内容的上游
pub fn garbled_upstream() -> Router {
    Router::new().route(
        "/products",
        get(|| async { (StatusCode::OK, "<html>maintenance</html>") }),
    )
}

/// 响应前睡眠指定时间的上游
pub fn slow_upstream(delay: Duration) -> Router {
    Router::new().route(
        "/products",
        get(move || async move {
            tokio::time::sleep(delay).await;
            (StatusCode::OK, sample_products().to_string())
        }),
    )
}

/// 在随机端口启动模拟上游，返回根地址
pub async fn spawn_upstream(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

/// 一个没有任何服务监听的地址
pub async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
