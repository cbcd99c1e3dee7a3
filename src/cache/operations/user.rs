use std::sync::Arc;

use crate::cache::client::CacheClient;
use crate::cache::keys::USERS_CACHE_KEY;
use crate::cache::models::{CachedUser, CachedUserList, SNAPSHOT_VERSION};
use crate::error::{AppError, AppResult};
use crate::models::User;

/// 用户列表缓存操作
#[derive(Clone)]
pub struct UserCacheOperations {
    cache: Arc<dyn CacheClient>,
}

impl UserCacheOperations {
    pub fn new(cache: Arc<dyn CacheClient>) -> Self {
        Self { cache }
    }

    /// 序列化用户列表快照
    pub fn encode(users: &[User]) -> AppResult<String> {
        let snapshot = CachedUserList {
            version: SNAPSHOT_VERSION,
            cached_at: chrono::Utc::now().timestamp(),
            users: users.iter().map(CachedUser::from).collect(),
        };
        Ok(serde_json::to_string(&snapshot)?)
    }

    /// 严格解析快照，格式或版本不符即报错
    pub fn decode(raw: &str) -> AppResult<Vec<User>> {
        let snapshot: CachedUserList = serde_json::from_str(raw)?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(AppError::CacheCodec(format!(
                "unsupported snapshot version {}",
                snapshot.version
            )));
        }
        Ok(snapshot.users.into_iter().map(User::from).collect())
    }

    /// 读取缓存的用户列表，未命中返回 None
    pub async fn load_users(&self) -> AppResult<Option<Vec<User>>> {
        match self.cache.get(USERS_CACHE_KEY).await? {
            Some(raw) => Self::decode(&raw).map(Some),
            None => Ok(None),
        }
    }

    pub async fn store_users(&self, users: &[User]) -> AppResult<()> {
        let raw = Self::encode(users)?;
        self.cache.set(USERS_CACHE_KEY, &raw).await
    }

    pub async fn invalidate_users(&self) -> AppResult<()> {
        self.cache.delete(USERS_CACHE_KEY).await
    }

    pub async fn ping(&self) -> AppResult<bool> {
        self.cache.ping().await
    }
}
