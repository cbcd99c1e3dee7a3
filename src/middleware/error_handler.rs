use axum::{
    body::{Body, HttpBody, to_bytes},
    http::Request,
    middleware::Next,
    response::Response,
};
use tracing::error;

use crate::error::ErrorLogged;

/// 记录日志时读取的响应体上限
const MAX_LOGGED_BODY: usize = 4096;

/// 记录尚未记录过的 5xx 响应及其响应体
pub async fn log_errors(req: Request<Body>, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let response = next.run(req).await;

    if !response.status().is_server_error() || response.extensions().get::<ErrorLogged>().is_some()
    {
        return response;
    }

    // 响应体过大或长度未知时不读取，原样返回
    let within_limit = response
        .body()
        .size_hint()
        .upper()
        .is_some_and(|len| len <= MAX_LOGGED_BODY as u64);
    if !within_limit {
        error!(
            "Server error on {} {} - Status: {}, Body: <not logged>",
            method,
            uri,
            response.status()
        );
        return response;
    }

    let (mut parts, body) = response.into_parts();
    let bytes = match to_bytes(body, MAX_LOGGED_BODY).await {
        Ok(b) => b,
        Err(e) => {
            error!("Failed to read error response body: {}", e);
            return Response::from_parts(parts, Body::empty());
        }
    };

    error!(
        "Server error on {} {} - Status: {}, Body: {}",
        method,
        uri,
        parts.status,
        String::from_utf8_lossy(&bytes)
    );

    // 重新构建响应体
    parts.headers.remove(axum::http::header::CONTENT_LENGTH);
    Response::from_parts(parts, Body::from(bytes))
}
