//! 登录流程：认证 + 写入登录状态

use crate::{
    error::AuthError,
    models::auth::Credentials,
    services::authenticator::Authenticator,
    session::{LoginAction, LoginState, SessionStore},
};
use std::sync::Arc;

pub struct LoginFlowController {
    authenticator: Arc<Authenticator>,
    session: Arc<SessionStore>,
}

impl LoginFlowController {
    pub fn new(authenticator: Arc<Authenticator>, session: Arc<SessionStore>) -> Self {
        Self {
            authenticator,
            session,
        }
    }

    /// 登录
    ///
    /// 成功时派发 `LoginSucceeded`；失败时不触碰状态，原样返回认证错误。
    pub async fn login(&self, credentials: Credentials) -> Result<(), AuthError> {
        let user = self
            .authenticator
            .authenticate(&credentials.email, &credentials.password)
            .await?;

        self.session.dispatch(LoginAction::LoginSucceeded(user));

        Ok(())
    }

    /// 登出
    pub fn logout(&self) {
        self.session.dispatch(LoginAction::LoggedOut);
        tracing::info!("Logged out");
    }

    pub fn state(&self) -> LoginState {
        self.session.current()
    }
}
