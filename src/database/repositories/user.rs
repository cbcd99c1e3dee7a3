use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::models::User;
use crate::user::types::{NewUser, UserChanges};

/// 用户存储，持久化用户并分配主键
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn create(&self, new_user: &NewUser) -> AppResult<User>;

    async fn get_by_id(&self, id: i64) -> AppResult<User>;

    /// 按插入顺序返回全部用户
    async fn list_all(&self) -> AppResult<Vec<User>>;

    async fn update(&self, id: i64, changes: &UserChanges) -> AppResult<User>;

    async fn delete(&self, id: i64) -> AppResult<()>;

    async fn health_check(&self) -> AppResult<bool>;
}

pub(crate) fn user_not_found(id: i64) -> AppError {
    AppError::NotFound(format!("用户 {} 不存在", id))
}

/// 基于 Postgres 连接池的用户存储
#[derive(Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn create(&self, new_user: &NewUser) -> AppResult<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email)
            VALUES ($1, $2)
            RETURNING id, name, email
            "#,
        )
        .bind(&new_user.name)
        .bind(&new_user.email)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    async fn get_by_id(&self, id: i64) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| user_not_found(id))
    }

    async fn list_all(&self) -> AppResult<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    async fn update(&self, id: i64, changes: &UserChanges) -> AppResult<User> {
        // COALESCE 保留未提供的字段
        sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET name = COALESCE($1, name),
                email = COALESCE($2, email)
            WHERE id = $3
            RETURNING id, name, email
            "#,
        )
        .bind(changes.name.as_deref())
        .bind(changes.email.as_deref())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| user_not_found(id))
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(user_not_found(id));
        }
        Ok(())
    }

    async fn health_check(&self) -> AppResult<bool> {
        let one: i32 = sqlx::query_scalar("SELECT 1").fetch_one(&self.pool).await?;
        Ok(one == 1)
    }
}
