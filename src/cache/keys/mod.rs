/// 缓存键模块

// 用户缓存键
pub mod user_keys;

pub use user_keys::USERS_CACHE_KEY;
