//! 核心错误处理模块

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// 核心错误类型
#[derive(Debug)]
pub enum CoreError {
    BadRequest(String),
    NotFound(String),
    /// 上游目录请求失败，消息可直接展示给用户
    UpstreamFailure(String),
    InternalServerError(String),
}

/// 错误响应结构
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub message: String,
    pub code: u16,
    pub timestamp: String,
}

impl CoreError {
    pub fn status(&self) -> StatusCode {
        match self {
            CoreError::BadRequest(_) => StatusCode::BAD_REQUEST,
            CoreError::NotFound(_) => StatusCode::NOT_FOUND,
            CoreError::UpstreamFailure(_) => StatusCode::BAD_GATEWAY,
            CoreError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (error_message, user_message) = match self {
            CoreError::BadRequest(msg) => ("BAD_REQUEST", msg),
            CoreError::NotFound(msg) => ("NOT_FOUND", msg),
            CoreError::UpstreamFailure(msg) => ("UPSTREAM_FAILURE", msg),
            CoreError::InternalServerError(msg) => ("INTERNAL_SERVER_ERROR", msg),
        };

        let error_response = ErrorResponse {
            success: false,
            error: error_message.to_string(),
            message: user_message,
            code: status.as_u16(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        (status, axum::Json(error_response)).into_response()
    }
}
