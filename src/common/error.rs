//! 核心错误处理模块

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// 未找到商品时的固定提示
pub const PRODUCT_NOT_FOUND: &str = "Product not found";

/// 核心错误类型
///
/// 所有错误都在检测到它的处理器内直接转换为纯文本响应。
#[derive(Debug, PartialEq, Eq)]
pub enum CoreError {
    /// 请求体解码失败，消息为解码器原文
    BadRequest(String),
    NotFound(String),
}

impl CoreError {
    pub fn product_not_found() -> Self {
        CoreError::NotFound(PRODUCT_NOT_FOUND.to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            CoreError::BadRequest(_) => StatusCode::BAD_REQUEST,
            CoreError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::BadRequest(err.to_string())
    }
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            CoreError::BadRequest(msg) | CoreError::NotFound(msg) => msg,
        };

        (status, message).into_response()
    }
}
