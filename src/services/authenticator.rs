//! 认证服务：查找凭证并校验密码

use crate::{
    error::AuthError,
    models::user::SanitizedUser,
    repository::credential_store::CredentialStore,
};
use secrecy::ExposeSecret;
use std::sync::Arc;
use std::time::Duration;

pub struct Authenticator {
    store: Arc<CredentialStore>,
    latency: Duration,
}

impl Authenticator {
    pub fn new(store: Arc<CredentialStore>, latency: Duration) -> Self {
        Self { store, latency }
    }

    /// 认证用户
    ///
    /// 无论成功与否都先等待固定延迟（模拟网络往返），然后按邮箱精确查找，
    /// 密码逐字比对。邮箱不存在与密码错误返回同一个错误。
    pub async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<SanitizedUser, AuthError> {
        tokio::time::sleep(self.latency).await;

        let user = self
            .store
            .find_by_email(email)
            .filter(|user| user.password.expose_secret() == password);

        match user {
            Some(user) => {
                metrics::counter!("login_attempts_total", "outcome" => "success").increment(1);
                tracing::info!(user_id = user.id, %email, "Authentication succeeded");
                Ok(SanitizedUser::from(user))
            }
            None => {
                metrics::counter!("login_attempts_total", "outcome" => "failure").increment(1);
                tracing::info!(%email, "Authentication failed");
                Err(AuthError::WrongCredentials)
            }
        }
    }
}
