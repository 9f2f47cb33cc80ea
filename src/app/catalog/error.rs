//! 上游请求失败分类

use reqwest::StatusCode;

/// 无法连接时展示给用户的提示
pub const CONNECTIVITY_MESSAGE: &str =
    "Unable to connect to the server. Please check your internet connection.";

/// 商品列表加载失败的通用提示
pub const PRODUCTS_FALLBACK_MESSAGE: &str = "Failed to load products. Please try again later.";

/// 单个商品加载失败的通用提示
pub const PRODUCT_FALLBACK_MESSAGE: &str = "Failed to load product. Please try again later.";

/// 上游请求的失败类型，只在客户端内部使用
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// 传输层无法到达主机
    #[error("无法连接上游服务: {0}")]
    Connectivity(#[source] reqwest::Error),
    /// 请求超过了超时时间
    #[error("上游请求超时: {0}")]
    Timeout(#[source] reqwest::Error),
    /// 上游返回了非成功状态码
    #[error("上游返回错误状态: {0}")]
    UpstreamStatus(StatusCode),
    /// 响应体无法解析
    #[error("上游响应解析失败: {0}")]
    Parse(String),
    /// 请求无法构建，例如 ID 拼出了非法 URL
    #[error("上游请求构建失败: {0}")]
    InvalidRequest(#[source] reqwest::Error),
    /// 收到响应后读取响应体失败
    #[error("读取上游响应体失败: {0}")]
    BodyRead(#[source] reqwest::Error),
}

impl FetchError {
    /// 按 reqwest 的结构化错误分类
    ///
    /// 超时优先于连接错误判断，连接阶段超时也算超时。
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout(err)
        } else if err.is_decode() {
            FetchError::Parse(err.to_string())
        } else if let Some(status) = err.status() {
            FetchError::UpstreamStatus(status)
        } else if err.is_builder() {
            FetchError::InvalidRequest(err)
        } else if err.is_body() {
            FetchError::BodyRead(err)
        } else {
            FetchError::Connectivity(err)
        }
    }

    pub fn is_connectivity(&self) -> bool {
        matches!(self, FetchError::Connectivity(_))
    }

    /// 面向用户的提示；除连接失败外都归为 `fallback`
    pub fn user_message(&self, fallback: &str) -> String {
        if self.is_connectivity() {
            CONNECTIVITY_MESSAGE.to_string()
        } else {
            fallback.to_string()
        }
    }
}
