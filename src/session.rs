//! 登录状态
//! 单一写入口（dispatch + reducer），订阅者通过 watch 通道观察变化

use crate::models::user::SanitizedUser;
use serde::Serialize;
use tokio::sync::watch;

/// 当前会话的登录状态，email 为空表示未登录
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoginState {
    pub email: String,
}

/// 状态变更动作
#[derive(Debug, Clone)]
pub enum LoginAction {
    LoginSucceeded(SanitizedUser),
    LoggedOut,
}

impl LoginState {
    pub fn is_logged_in(&self) -> bool {
        !self.email.is_empty()
    }

    /// 纯函数 reducer：只替换 email，不做累加
    pub fn reduce(&self, action: &LoginAction) -> LoginState {
        match action {
            LoginAction::LoginSucceeded(user) => LoginState {
                email: user.email.clone(),
            },
            LoginAction::LoggedOut => LoginState::default(),
        }
    }
}

/// 登录状态容器
pub struct SessionStore {
    sender: watch::Sender<LoginState>,
}

impl SessionStore {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(LoginState::default());
        Self { sender }
    }

    /// 应用一个动作；watch 发送端保证写入串行且整体生效
    pub fn dispatch(&self, action: LoginAction) {
        self.sender.send_modify(|state| {
            *state = state.reduce(&action);
        });

        tracing::debug!(action = action_name(&action), "Login state updated");
    }

    /// 当前状态快照
    pub fn current(&self) -> LoginState {
        self.sender.borrow().clone()
    }

    /// 订阅状态变化
    pub fn subscribe(&self) -> watch::Receiver<LoginState> {
        self.sender.subscribe()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

fn action_name(action: &LoginAction) -> &'static str {
    match action {
        LoginAction::LoginSucceeded(_) => "login_succeeded",
        LoginAction::LoggedOut => "logged_out",
    }
}
