use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// 用户实体，id 由数据库分配
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}
