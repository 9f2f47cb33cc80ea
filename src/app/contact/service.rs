//! 联系表单业务服务
//!
//! 只做校验和记录日志，不会真正投递消息。

use std::time::Duration;
use tracing::info;
use validator::Validate;

use super::model::{ContactAck, ContactRequest};
use crate::config::ContactConfig;
use crate::core::error::CoreError;

pub const SENT_MESSAGE: &str = "Message sent successfully";

/// 联系表单校验错误
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("Missing required fields")]
    MissingFields,
    #[error("Invalid email address")]
    InvalidEmail,
}

impl From<ContactError> for CoreError {
    fn from(err: ContactError) -> Self {
        CoreError::BadRequest(err.to_string())
    }
}

#[derive(Clone)]
pub struct ContactService {
    response_delay: Duration,
}

impl ContactService {
    pub fn new(config: &ContactConfig) -> Self {
        Self {
            response_delay: config.response_delay(),
        }
    }

    /// 必填字段优先于邮箱格式检查
    pub fn validate(&self, request: &ContactRequest) -> Result<(), ContactError> {
        request.validate().map_err(|errors| {
            let missing = errors
                .field_errors()
                .values()
                .flat_map(|errs| errs.iter())
                .any(|e| e.code == "required");
            if missing {
                ContactError::MissingFields
            } else {
                ContactError::InvalidEmail
            }
        })
    }

    pub async fn submit(&self, request: ContactRequest) -> Result<ContactAck, ContactError> {
        self.validate(&request)?;

        info!(
            name = %request.name,
            email = %request.email,
            subject = ?request.subject,
            message = %request.message,
            "收到联系表单提交"
        );

        tokio::time::sleep(self.response_delay).await;

        Ok(ContactAck {
            name: request.name,
            email: request.email,
            subject: request.subject,
        })
    }
}
