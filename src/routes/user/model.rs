use serde::{Deserialize, Serialize};

/// 字段缺失由校验层报错，这里全部可选
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DeleteUserResponse {
    pub message: String,
}
