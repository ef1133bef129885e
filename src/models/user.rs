//! 用户模型

use secrecy::Secret;
use serde::{Deserialize, Serialize};

/// 凭证库中的用户记录（种子数据，运行期不可变）
#[derive(Debug, Clone, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// 明文保存，仅用于精确比对；Secret 保证不会出现在 Debug/日志中
    pub password: Secret<String>,
    pub token: String,
}

/// 认证成功后返回给调用方的用户信息（不含密码）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SanitizedUser {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub token: String,
}

impl From<&UserRecord> for SanitizedUser {
    fn from(user: &UserRecord) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            token: user.token.clone(),
        }
    }
}
