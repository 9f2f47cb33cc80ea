//! HTTP 客户端基础设施

use reqwest::Client;
use std::time::Duration;

/// 构建带整体请求超时的 HTTP 客户端
///
/// 超时覆盖连接、发送和读取响应体的全过程。
pub fn build_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(timeout)
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
        .build()
}
