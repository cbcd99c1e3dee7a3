use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::models::User;

pub const NAME_MAX_LEN: usize = 100;
pub const EMAIL_MAX_LEN: usize = 120;

/// 已校验的新用户数据
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

impl NewUser {
    pub fn parse(name: Option<String>, email: Option<String>) -> AppResult<Self> {
        let name = name.ok_or_else(|| AppError::Validation("缺少字段 name".to_string()))?;
        let email = email.ok_or_else(|| AppError::Validation("缺少字段 email".to_string()))?;

        Ok(Self {
            name: validate_name(&name)?,
            email: validate_email(&email)?,
        })
    }
}

/// 部分更新，None 表示保留原值
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserChanges {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl UserChanges {
    pub fn parse(name: Option<String>, email: Option<String>) -> AppResult<Self> {
        Ok(Self {
            name: name.as_deref().map(validate_name).transpose()?,
            email: email.as_deref().map(validate_email).transpose()?,
        })
    }

    pub fn apply_to(&self, user: &mut User) {
        if let Some(name) = &self.name {
            user.name = name.clone();
        }
        if let Some(email) = &self.email {
            user.email = email.clone();
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    Cache,
    Database,
}

/// 用户列表结果，标明数据来源
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserListing {
    pub source: DataSource,
    pub data: Vec<User>,
}

fn validate_name(raw: &str) -> AppResult<String> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(AppError::Validation("name 不能为空".to_string()));
    }
    if name.chars().count() > NAME_MAX_LEN {
        return Err(AppError::Validation(format!(
            "name 长度不能超过{}个字符",
            NAME_MAX_LEN
        )));
    }
    Ok(name.to_string())
}

fn validate_email(raw: &str) -> AppResult<String> {
    let email = raw.trim();
    if email.chars().count() > EMAIL_MAX_LEN {
        return Err(AppError::Validation(format!(
            "email 长度不能超过{}个字符",
            EMAIL_MAX_LEN
        )));
    }
    if !is_valid_email(email) {
        return Err(AppError::Validation("email 格式无效".to_string()));
    }
    Ok(email.to_string())
}

fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}
