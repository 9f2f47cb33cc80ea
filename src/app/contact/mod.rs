//! 联系表单：模拟提交接口

pub mod handler;
pub mod model;
pub mod service;

pub use model::{ContactAck, ContactRequest};
pub use service::{ContactError, ContactService};
