/// 全部用户列表的缓存键，整个系统只使用这一个键
pub const USERS_CACHE_KEY: &str = "users_cache";
