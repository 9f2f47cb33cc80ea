//! 应用层：路由和处理器

pub mod catalog;
pub mod contact;

use axum::{
    middleware,
    response::Json,
    routing::{get, post},
    Router,
};
use std::time::Duration;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::AppConfig;
use crate::core::middleware::request_logging_middleware;
use catalog::CatalogClient;
use contact::ContactService;

#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogClient,
    pub contact: ContactService,
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            catalog: CatalogClient::new(&config.catalog)?,
            contact: ContactService::new(&config.contact),
        })
    }
}

/// 创建应用路由
pub fn router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/", get(api_info))
        .route("/health", get(health_check))
        .route("/api/products", get(catalog::handler::list_products))
        .route("/api/products/ids", get(catalog::handler::list_product_ids))
        .route("/api/products/:id", get(catalog::handler::get_product))
        .route("/api/contact", post(contact::handler::submit_contact))
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TimeoutLayer::new(request_timeout))
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API 信息
async fn api_info() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "GET /api/products": "获取全部商品",
            "GET /api/products/ids": "获取全部商品 ID",
            "GET /api/products/:id": "获取单个商品",
            "POST /api/contact": "提交联系表单",
            "GET /health": "健康检查"
        }
    }))
}

/// 健康检查
async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}
