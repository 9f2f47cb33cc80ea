//! 商品目录处理器

use axum::{
    extract::{Path, State},
    response::Json,
};
use tracing::info;

use super::model::{FetchResult, Product, ProductPath};
use crate::app::AppState;
use crate::core::error::CoreError;

pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<FetchResult<Vec<Product>>>, CoreError> {
    match state.catalog.fetch_all_products().await {
        FetchResult::Failure { error } => Err(CoreError::UpstreamFailure(error)),
        result => Ok(Json(result)),
    }
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<FetchResult<Product>>, CoreError> {
    match state.catalog.fetch_product_by_id(&id).await {
        FetchResult::Success { data: Some(product) } => Ok(Json(FetchResult::success(product))),
        FetchResult::Success { data: None } => {
            info!("商品不存在，ID: {}", id);
            Err(CoreError::NotFound(format!("Product {} not found", id)))
        }
        FetchResult::Failure { error } => Err(CoreError::UpstreamFailure(error)),
    }
}

/// 静态路径列表，上游失败时为空数组
pub async fn list_product_ids(State(state): State<AppState>) -> Json<Vec<ProductPath>> {
    let ids = state.catalog.list_all_product_ids().await;
    Json(ids.into_iter().map(|id| ProductPath { id }).collect())
}
