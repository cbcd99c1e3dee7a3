#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use users_backend::{
    cache::CacheClient,
    database::UserStore,
    error::{AppError, AppResult},
    models::User,
    user::{NewUser, UserChanges},
};

/// 内存用户存储
#[derive(Default)]
pub struct MemoryUserStore {
    rows: Mutex<Vec<User>>,
    next_id: AtomicUsize,
    down: AtomicBool,
}

impl MemoryUserStore {
    pub fn set_down(&self, down: bool) {
        self.down.store(down, Ordering::SeqCst);
    }

    fn check(&self) -> AppResult<()> {
        if self.down.load(Ordering::SeqCst) {
            return Err(AppError::StoreUnavailable("connection refused".into()));
        }
        Ok(())
    }

    fn missing(id: i64) -> AppError {
        AppError::NotFound(format!("user {} not found", id))
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn create(&self, new_user: &NewUser) -> AppResult<User> {
        self.check()?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) as i64 + 1;
        let user = User {
            id,
            name: new_user.name.clone(),
            email: new_user.email.clone(),
        };
        self.rows.lock().unwrap().push(user.clone());
        Ok(user)
    }

    async fn get_by_id(&self, id: i64) -> AppResult<User> {
        self.check()?;
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or_else(|| Self::missing(id))
    }

    async fn list_all(&self) -> AppResult<Vec<User>> {
        self.check()?;
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn update(&self, id: i64, changes: &UserChanges) -> AppResult<User> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        let user = rows
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| Self::missing(id))?;
        changes.apply_to(user);
        Ok(user.clone())
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|u| u.id != id);
        if rows.len() == before {
            return Err(Self::missing(id));
        }
        Ok(())
    }

    async fn health_check(&self) -> AppResult<bool> {
        self.check()?;
        Ok(true)
    }
}

/// 内存缓存，可模拟不可用并统计调用次数
#[derive(Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, String>>,
    down: AtomicBool,
    fail_sets: AtomicBool,
    pub sets: AtomicUsize,
    pub deletes: AtomicUsize,
}

impl MemoryCache {
    pub fn set_down(&self, down: bool) {
        self.down.store(down, Ordering::SeqCst);
    }

    /// 只让写入失败，读取和删除照常
    pub fn set_fail_sets(&self, fail: bool) {
        self.fail_sets.store(fail, Ordering::SeqCst);
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    pub fn put_raw(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    fn check(&self) -> AppResult<()> {
        if self.down.load(Ordering::SeqCst) {
            return Err(AppError::CacheUnavailable("connection refused".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl CacheClient for MemoryCache {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        self.check()?;
        Ok(self.raw(key))
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.check()?;
        self.sets.fetch_add(1, Ordering::SeqCst);
        if self.fail_sets.load(Ordering::SeqCst) {
            return Err(AppError::CacheUnavailable("write rejected".into()));
        }
        self.put_raw(key, value);
        Ok(())
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        self.check()?;
        self.deletes.fetch_add(1, Ordering::SeqCst);
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }

    async fn ping(&self) -> AppResult<bool> {
        self.check()?;
        Ok(true)
    }
}
