use axum::{
    Router,
    routing::get,
};

use crate::{AppState, middleware::log_errors, routes};

// 用户相关的路由
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/users",
            get(routes::user::list_users).post(routes::user::create_user),
        )
        .route(
            "/users/{id}",
            get(routes::user::get_user)
                .put(routes::user::update_user)
                .delete(routes::user::delete_user),
        )
}

// 系统路由
pub fn system_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(routes::system::index))
        .route("/health", get(routes::system::health))
}

// 创建主路由
pub fn create_router(state: AppState) -> Router {
    let router = Router::new()
        .merge(system_routes())
        .merge(user_routes())
        .fallback(routes::system::not_found)
        .method_not_allowed_fallback(routes::system::method_not_allowed)
        .layer(axum::middleware::from_fn(log_errors));

    // 开发模式允许所有来源
    #[cfg(debug_assertions)]
    let router = {
        tracing::debug!("Adding CORS layer for development mode");
        router.layer(tower_http::cors::CorsLayer::permissive())
    };

    router.with_state(state)
}
