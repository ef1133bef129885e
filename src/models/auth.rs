//! 认证相关模型

use serde::{Deserialize, Serialize};
use std::fmt;

/// 登录凭证，仅在单次登录尝试内有效
#[derive(Clone, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// 登录响应
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub email: String,
}

/// 问候响应
#[derive(Debug, Serialize)]
pub struct GreetingResponse {
    pub greeting: String,
}
