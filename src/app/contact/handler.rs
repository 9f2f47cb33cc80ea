//! 联系表单处理器

use axum::{body::Bytes, extract::State, response::Json};
use tracing::{error, warn};

use super::model::{ContactAck, ContactRequest};
use super::service::SENT_MESSAGE;
use crate::app::AppState;
use crate::core::error::CoreError;
use crate::core::response::ApiResponse;

pub const PROCESSING_ERROR_MESSAGE: &str = "An error occurred while processing your request";

/// 请求体按 JSON 解析，不要求 `Content-Type: application/json`
pub async fn submit_contact(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ApiResponse<ContactAck>>, CoreError> {
    let request = ContactRequest::from_body(&body).ok_or_else(|| {
        error!("联系表单请求体解析失败，长度: {}", body.len());
        CoreError::InternalServerError(PROCESSING_ERROR_MESSAGE.to_string())
    })?;

    let ack = state.contact.submit(request).await.map_err(|e| {
        warn!("联系表单校验失败: {}", e);
        CoreError::from(e)
    })?;

    Ok(Json(ApiResponse::success(ack).with_message(SENT_MESSAGE)))
}
