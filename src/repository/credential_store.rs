//! 凭证库：内存中的只读用户表

use crate::{error::AppError, models::user::UserRecord};
use secrecy::Secret;
use std::path::Path;

pub struct CredentialStore {
    users: Vec<UserRecord>,
}

impl CredentialStore {
    pub fn new(users: Vec<UserRecord>) -> Self {
        Self { users }
    }

    /// 内置演示账户
    pub fn seeded() -> Self {
        Self::new(vec![UserRecord {
            id: 1,
            first_name: "amitai".to_string(),
            last_name: "barnea".to_string(),
            email: "amitai@spectory.com".to_string(),
            password: Secret::new("qwe123".to_string()),
            token: "abcd4321".to_string(),
        }])
    }

    /// 从 JSON 数组文件加载用户
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("failed to read seed file {}: {}", path.display(), e))
        })?;

        let users: Vec<UserRecord> = serde_json::from_str(&raw).map_err(|e| {
            AppError::Config(format!("invalid seed file {}: {}", path.display(), e))
        })?;

        tracing::info!(path = %path.display(), users = users.len(), "Credential store loaded");

        Ok(Self::new(users))
    }

    /// 按邮箱精确查找（区分大小写），重复邮箱取第一条
    pub fn find_by_email(&self, email: &str) -> Option<&UserRecord> {
        self.users.iter().find(|user| user.email == email)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
