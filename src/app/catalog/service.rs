//! 商品目录客户端
//!
//! 调用上游商品 API，并把所有失败折叠为 [`FetchResult::Failure`]。
//! 每次调用相互独立：没有缓存，没有重试。

use reqwest::Client;
use serde::de::DeserializeOwned;
use std::fmt::Display;
use tracing::{debug, error};

use super::error::{FetchError, PRODUCTS_FALLBACK_MESSAGE, PRODUCT_FALLBACK_MESSAGE};
use super::model::{FetchResult, Product};
use crate::config::CatalogConfig;
use crate::infrastructure::http_client::build_client;

#[derive(Clone)]
pub struct CatalogClient {
    base_url: String,
    client: Client,
}

impl CatalogClient {
    pub fn new(config: &CatalogConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client: build_client(config.timeout())?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// 获取全部商品
    pub async fn fetch_all_products(&self) -> FetchResult<Vec<Product>> {
        let url = format!("{}/products", self.base_url);

        match self.get_json::<Vec<Product>>(&url).await {
            Ok(products) => {
                debug!("获取商品列表成功，共 {} 个商品", products.len());
                FetchResult::success(products)
            }
            Err(e) => {
                error!("获取商品列表失败: {}", e);
                FetchResult::failure(e.user_message(PRODUCTS_FALLBACK_MESSAGE))
            }
        }
    }

    /// 按 ID 获取单个商品
    ///
    /// ID 不做校验，由上游判断。响应体为 JSON `null` 时返回 `Success(None)`，
    /// 由调用方决定如何处理不存在的商品；空响应体按解析失败处理。
    pub async fn fetch_product_by_id<I: Display>(&self, id: I) -> FetchResult<Option<Product>> {
        let url = format!("{}/products/{}", self.base_url, id);

        match self.get_json::<Option<Product>>(&url).await {
            Ok(product) => {
                debug!("获取商品成功，ID: {}, 存在: {}", id, product.is_some());
                FetchResult::success(product)
            }
            Err(e) => {
                error!("获取商品失败，ID: {}, 错误: {}", id, e);
                FetchResult::failure(e.user_message(PRODUCT_FALLBACK_MESSAGE))
            }
        }
    }

    /// 列出全部商品 ID，失败时返回空列表
    pub async fn list_all_product_ids(&self) -> Vec<String> {
        match self.fetch_all_products().await {
            FetchResult::Success { data } => data.iter().map(|p| p.id.to_string()).collect(),
            FetchResult::Failure { .. } => Vec::new(),
        }
    }

    async fn send(&self, url: &str) -> Result<reqwest::Response, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(FetchError::from_transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::UpstreamStatus(status));
        }
        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let response = self.send(url).await?;
        response.json::<T>().await.map_err(FetchError::from_transport)
    }
}
