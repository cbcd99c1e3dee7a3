use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;

use crate::{
    AppState,
    error::{ErrorLogged, ErrorResponse},
};

pub const AVAILABLE_ROUTES: &[&str] = &[
    "GET /",
    "POST /users",
    "GET /users",
    "GET /users/{id}",
    "PUT /users/{id}",
    "DELETE /users/{id}",
    "GET /health",
];

#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    pub message: String,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[axum::debug_handler]
pub async fn index() -> impl IntoResponse {
    Json(WelcomeResponse {
        message: "欢迎使用用户服务 API".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

#[axum::debug_handler]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    match state.users.health().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "healthy",
                error: None,
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            let mut response = (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(HealthResponse {
                    status: "unhealthy",
                    error: Some(e.public_message()),
                }),
            )
                .into_response();
            response.extensions_mut().insert(ErrorLogged);
            response
        }
    }
}

fn route_error(status: StatusCode, message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            code: status.as_u16(),
            error_message: message.to_string(),
            available_routes: Some(AVAILABLE_ROUTES),
        }),
    )
}

/// 未匹配路由
pub async fn not_found() -> impl IntoResponse {
    route_error(StatusCode::NOT_FOUND, "路由不存在")
}

/// 路由存在但方法不支持
pub async fn method_not_allowed() -> impl IntoResponse {
    route_error(StatusCode::METHOD_NOT_ALLOWED, "请求方法不支持")
}
