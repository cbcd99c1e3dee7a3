/// 缓存操作

// 用户列表缓存操作
pub mod user;

pub use user::UserCacheOperations;
