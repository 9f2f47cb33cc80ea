//! # 商品展示服务
//!
//! 从公开的商品目录 API 获取商品，并通过 HTTP 提供给页面渲染方：
//! - 商品目录客户端：超时控制，失败统一折叠为 `FetchResult`
//! - 联系表单模拟接口
//! - 配置、日志等基础设施

pub mod app;
pub mod config;
pub mod core;
pub mod infrastructure;

pub use app::catalog::{CatalogClient, FetchResult, Product};
pub use config::AppConfig;
