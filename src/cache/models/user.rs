use serde::{Deserialize, Serialize};

use crate::models::User;

/// 当前快照格式版本
pub const SNAPSHOT_VERSION: u32 = 1;

/// 用户缓存数据模型
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CachedUser {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// 用户列表快照
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CachedUserList {
    pub version: u32,
    pub cached_at: i64, // Unix timestamp
    pub users: Vec<CachedUser>,
}

impl From<&User> for CachedUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

impl From<CachedUser> for User {
    fn from(cached: CachedUser) -> Self {
        Self {
            id: cached.id,
            name: cached.name,
            email: cached.email,
        }
    }
}
