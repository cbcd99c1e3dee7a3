use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("cache unavailable: {0}")]
    CacheUnavailable(String),

    #[error("cache codec error: {0}")]
    CacheCodec(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::StoreUnavailable(_)
            | AppError::CacheUnavailable(_)
            | AppError::CacheCodec(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 返回给客户端的消息，后端错误细节只写日志
    pub fn public_message(&self) -> String {
        match self {
            AppError::Validation(msg) | AppError::NotFound(msg) => msg.clone(),
            AppError::StoreUnavailable(_) => "数据库不可用".to_string(),
            AppError::CacheUnavailable(_) => "缓存服务不可用".to_string(),
            AppError::CacheCodec(_) => "缓存数据无效".to_string(),
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::StoreUnavailable(e.to_string())
    }
}

impl From<redis::RedisError> for AppError {
    fn from(e: redis::RedisError) -> Self {
        AppError::CacheUnavailable(e.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::CacheCodec(e.to_string())
    }
}

/// 响应扩展标记：该错误已在生成响应时记录日志
#[derive(Debug, Clone, Copy)]
pub(crate) struct ErrorLogged;

#[derive(Serialize)]
pub(crate) struct ErrorResponse {
    pub code: u16,
    pub error_message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_routes: Option<&'static [&'static str]>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{}", self);
        }

        let body = Json(ErrorResponse {
            code: status.as_u16(),
            error_message: self.public_message(),
            available_routes: None,
        });

        let mut response = (status, body).into_response();
        if status.is_server_error() {
            response.extensions_mut().insert(ErrorLogged);
        }
        response
    }
}
