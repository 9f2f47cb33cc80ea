//! 商品目录数据模型

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

/// 上游商品，只读
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    pub image: String,
    pub rating: Rating,
}

/// 商品评分
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// 0 到 5 之间
    pub rate: f64,
    pub count: u64,
}

/// 静态路径列表中的一项
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductPath {
    pub id: String,
}

/// 目录操作的结果，成功与失败二选一
///
/// 序列化为 `{"success": true, "data": ...}` 或 `{"success": false, "error": "..."}`。
#[derive(Debug, Clone, PartialEq)]
pub enum FetchResult<T> {
    Success { data: T },
    Failure { error: String },
}

impl<T> FetchResult<T> {
    pub fn success(data: T) -> Self {
        FetchResult::Success { data }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        FetchResult::Failure {
            error: error.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, FetchResult::Success { .. })
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            FetchResult::Success { data } => Some(data),
            FetchResult::Failure { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchResult::Success { .. } => None,
            FetchResult::Failure { error } => Some(error),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> FetchResult<U> {
        match self {
            FetchResult::Success { data } => FetchResult::Success { data: f(data) },
            FetchResult::Failure { error } => FetchResult::Failure { error },
        }
    }

    pub fn into_result(self) -> Result<T, String> {
        match self {
            FetchResult::Success { data } => Ok(data),
            FetchResult::Failure { error } => Err(error),
        }
    }
}

impl<T: Serialize> Serialize for FetchResult<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("FetchResult", 2)?;
        match self {
            FetchResult::Success { data } => {
                state.serialize_field("success", &true)?;
                state.serialize_field("data", data)?;
            }
            FetchResult::Failure { error } => {
                state.serialize_field("success", &false)?;
                state.serialize_field("error", error)?;
            }
        }
        state.end()
    }
}
