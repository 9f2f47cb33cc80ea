//! 联系表单数据模型
//!
//! 字段保留原始 JSON 值：必填检查只看真假值，`subject` 原样回显。

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::OnceLock;
use validator::{Validate, ValidationError, ValidationErrors};

static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();

fn email_pattern() -> &'static Regex {
    EMAIL_PATTERN.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("邮箱正则表达式无效")
    })
}

/// 联系表单请求，缺失的必填字段记为 `null`
#[derive(Debug, Clone, PartialEq)]
pub struct ContactRequest {
    pub name: Value,
    pub email: Value,
    /// `None` 表示请求中没有该字段
    pub subject: Option<Value>,
    pub message: Value,
}

/// 提交成功后回显的字段
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactAck {
    pub name: Value,
    pub email: Value,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub subject: Option<Value>,
}

impl ContactRequest {
    /// 从请求体解析，不检查 Content-Type
    ///
    /// 请求体不是合法 JSON，或顶层为 `null` 时返回 `None`。
    /// 其他非对象的顶层值按字段全部缺失处理。
    pub fn from_body(body: &[u8]) -> Option<Self> {
        let value: Value = serde_json::from_slice(body).ok()?;
        if value.is_null() {
            return None;
        }

        let field = |key: &str| value.get(key).cloned();
        Some(Self {
            name: field("name").unwrap_or(Value::Null),
            email: field("email").unwrap_or(Value::Null),
            subject: field("subject"),
            message: field("message").unwrap_or(Value::Null),
        })
    }
}

impl Validate for ContactRequest {
    /// 先检查必填字段（错误码 `required`），全部存在时才检查邮箱格式（错误码 `email`）
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ] {
            if !is_truthy(value) {
                errors.add(field, ValidationError::new("required"));
            }
        }
        if !errors.is_empty() {
            return Err(errors);
        }

        let email_ok = as_text(&self.email).is_some_and(|text| email_pattern().is_match(&text));
        if !email_ok {
            errors.add("email", ValidationError::new("email"));
            return Err(errors);
        }
        Ok(())
    }
}

/// JSON 值的真假判断：`null`、`false`、`0`、空字符串为假
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// 把标量值转为用于格式检查的文本，数组和对象没有文本形式
pub fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
