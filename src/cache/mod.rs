// 缓存模块
// 缓存客户端契约、键、快照模型和读写操作

pub mod client;
pub mod keys;
pub mod models;
pub mod operations;

pub use client::{CacheClient, RedisCacheClient};
pub use operations::user::UserCacheOperations;
