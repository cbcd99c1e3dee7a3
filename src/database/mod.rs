// 数据库模块
// 用户存储契约及其 Postgres 实现

pub mod repositories;

pub use repositories::user::{PgUserStore, UserStore};
