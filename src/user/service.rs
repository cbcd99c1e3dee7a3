use std::sync::Arc;

use crate::cache::{CacheClient, UserCacheOperations};
use crate::database::UserStore;
use crate::error::{AppError, AppResult};
use crate::models::User;

use super::types::{DataSource, NewUser, UserChanges, UserListing};

/// 用户服务，协调数据库写入与列表缓存
///
/// 写操作：先写数据库，成功后删除列表缓存；数据库失败时不碰缓存。
///
/// 两种已知的旧快照窗口，均不做补偿：
/// - 删除缓存失败不回滚已提交的写入，只记录日志，
///   在下一次成功失效之前读请求可能拿到旧快照。
/// - 读请求未命中并读到旧数据后，并发写入提交并删除缓存，
///   随后该读请求才回填，旧快照会一直保留到下一次写入。
///
/// 列表读取：先查缓存，命中直接返回；未命中或缓存不可用时读数据库并回填。
/// 回填失败不影响本次返回。单个用户查询不经过缓存。
#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn UserStore>,
    cache: UserCacheOperations,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>, cache: Arc<dyn CacheClient>) -> Self {
        Self {
            store,
            cache: UserCacheOperations::new(cache),
        }
    }

    pub async fn create(&self, name: Option<String>, email: Option<String>) -> AppResult<User> {
        let new_user = NewUser::parse(name, email)?;
        let user = self.store.create(&new_user).await?;
        tracing::info!("Created user {}", user.id);

        self.invalidate_after_write("create", user.id).await;
        Ok(user)
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<User> {
        self.store.get_by_id(id).await
    }

    pub async fn list(&self) -> AppResult<UserListing> {
        match self.cache.load_users().await {
            Ok(Some(users)) => {
                tracing::debug!("users cache hit ({} users)", users.len());
                return Ok(UserListing {
                    source: DataSource::Cache,
                    data: users,
                });
            }
            Ok(None) => tracing::debug!("users cache miss"),
            Err(e) => tracing::warn!("users cache lookup failed, reading store: {}", e),
        }

        let users = self.store.list_all().await?;

        if let Err(e) = self.cache.store_users(&users).await {
            tracing::warn!("Failed to populate users cache: {}", e);
        }

        Ok(UserListing {
            source: DataSource::Database,
            data: users,
        })
    }

    pub async fn update(
        &self,
        id: i64,
        name: Option<String>,
        email: Option<String>,
    ) -> AppResult<User> {
        let changes = UserChanges::parse(name, email)?;
        let user = self.store.update(id, &changes).await?;
        tracing::info!("Updated user {}", user.id);

        self.invalidate_after_write("update", user.id).await;
        Ok(user)
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.store.delete(id).await?;
        tracing::info!("Deleted user {}", id);

        self.invalidate_after_write("delete", id).await;
        Ok(())
    }

    /// 数据库和缓存都可达才算健康
    pub async fn health(&self) -> AppResult<()> {
        if !self.store.health_check().await? {
            return Err(AppError::StoreUnavailable(
                "health query returned an unexpected result".to_string(),
            ));
        }
        if !self.cache.ping().await? {
            return Err(AppError::CacheUnavailable("ping failed".to_string()));
        }
        Ok(())
    }

    async fn invalidate_after_write(&self, op: &str, id: i64) {
        match self.cache.invalidate_users().await {
            Ok(()) => tracing::debug!("users cache invalidated after {} of user {}", op, id),
            Err(e) => tracing::error!(
                "Failed to invalidate users cache after {} of user {}, cached list may be stale: {}",
                op,
                id,
                e
            ),
        }
    }
}
