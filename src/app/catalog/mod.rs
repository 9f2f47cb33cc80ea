//! 商品目录：上游客户端、数据模型和 HTTP 处理器

pub mod error;
pub mod handler;
pub mod model;
pub mod service;

pub use error::FetchError;
pub use model::{FetchResult, Product, ProductPath, Rating};
pub use service::CatalogClient;
