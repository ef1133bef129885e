//! 认证相关的 HTTP 处理器

use crate::{
    error::AppError,
    middleware::AppState,
    models::auth::{Credentials, LoginResponse},
};
use axum::{
    extract::{rejection::JsonRejection, State},
    response::IntoResponse,
    Json,
};
use serde_json::json;
use std::sync::Arc;

/// 仅校验凭证，返回用户信息，不修改登录状态
pub async fn authenticate(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Credentials>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(req) = payload?;
    let user = state
        .authenticator
        .authenticate(&req.email, &req.password)
        .await?;

    Ok(Json(user))
}

/// 登录
pub async fn login(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Credentials>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(req) = payload?;
    // 成功时认证邮箱即请求邮箱
    let email = req.email.clone();
    state.login_flow.login(req).await?;

    Ok(Json(LoginResponse { email }))
}

/// 登出
pub async fn logout(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, AppError> {
    state.login_flow.logout();

    Ok(Json(json!({"message": "Logged out"})))
}
