use axum::{
    extract::{
        Json, Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::IntoResponse,
};

use crate::{AppState, error::AppError};

use super::model::{CreateUserRequest, DeleteUserResponse, UpdateUserRequest};

fn user_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, AppError> {
    // 非整数 id 与未匹配路由一样按 404 处理
    path.map(|Path(id)| id)
        .map_err(|_| AppError::NotFound("用户不存在".to_string()))
}

fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    body.map(|Json(req)| req)
        .map_err(|e| AppError::Validation(format!("请求体无效: {}", e.body_text())))
}

#[axum::debug_handler]
pub async fn create_user(
    State(state): State<AppState>,
    body: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let req = json_body(body)?;
    let user = state.users.create(req.name, req.email).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

#[axum::debug_handler]
pub async fn list_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let listing = state.users.list().await?;

    Ok((StatusCode::OK, Json(listing)))
}

#[axum::debug_handler]
pub async fn get_user(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = user_id(path)?;
    let user = state.users.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(user)))
}

#[axum::debug_handler]
pub async fn update_user(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = user_id(path)?;
    let req = json_body(body)?;
    let user = state.users.update(id, req.name, req.email).await?;

    Ok((StatusCode::OK, Json(user)))
}

#[axum::debug_handler]
pub async fn delete_user(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = user_id(path)?;
    state.users.delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(DeleteUserResponse {
            message: "用户已删除".to_string(),
        }),
    ))
}
