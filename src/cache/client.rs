use std::sync::Arc;

use async_trait::async_trait;
use redis::{AsyncCommands, Client as RedisClient};

use crate::error::{AppError, AppResult};

/// 键值缓存客户端
#[async_trait]
pub trait CacheClient: Send + Sync {
    /// 键不存在时返回 None，不视为错误
    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// 无条件覆盖，不设置过期时间
    async fn set(&self, key: &str, value: &str) -> AppResult<()>;

    /// 删除不存在的键不是错误
    async fn delete(&self, key: &str) -> AppResult<()>;

    async fn ping(&self) -> AppResult<bool>;
}

/// Redis 实现，每次调用获取一个多路复用连接
#[derive(Clone)]
pub struct RedisCacheClient {
    redis: Arc<RedisClient>,
}

impl RedisCacheClient {
    pub fn new(redis: Arc<RedisClient>) -> Self {
        Self { redis }
    }
}

#[async_trait]
impl CacheClient for RedisCacheClient {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        let mut conn = self.redis.get_multiplexed_async_connection().await?;
        let value: Option<String> = conn.get(key).await?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let mut conn = self.redis.get_multiplexed_async_connection().await?;
        let _: () = conn.set(key, value).await?;
        Ok(())
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        let mut conn = self.redis.get_multiplexed_async_connection().await?;
        let _: i64 = conn.del(key).await?;
        Ok(())
    }

    async fn ping(&self) -> AppResult<bool> {
        let mut conn = self.redis.get_multiplexed_async_connection().await?;
        let pong: String = redis::cmd("PING").query_async(&mut conn).await?;
        if pong != "PONG" {
            return Err(AppError::CacheUnavailable(format!(
                "unexpected PING reply: {}",
                pong
            )));
        }
        Ok(true)
    }
}
