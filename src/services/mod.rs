//! 业务服务层

pub mod authenticator;
pub mod login_flow;

pub use authenticator::Authenticator;
pub use login_flow::LoginFlowController;
