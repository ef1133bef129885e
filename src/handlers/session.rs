//! 登录状态读取与订阅（SSE）

use crate::{error::AppError, middleware::AppState, session::LoginState};
use axum::{
    extract::State,
    http::StatusCode,
    response::Response,
    Json,
};
use futures::StreamExt;
use std::convert::Infallible;
use std::sync::Arc;
use tokio_stream::wrappers::WatchStream;

/// 当前登录状态
pub async fn current_session(State(state): State<Arc<AppState>>) -> Json<LoginState> {
    Json(state.session.current())
}

/// 订阅登录状态变化（SSE），首个事件为当前状态
pub async fn subscribe_session_events(
    State(state): State<Arc<AppState>>,
) -> Result<Response, AppError> {
    let stream = WatchStream::new(state.session.subscribe())
        .map(|login| Ok::<_, Infallible>(to_sse_event(&login)));

    let body = axum::body::Body::from_stream(stream);

    Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", "text/event-stream")
        .header("Cache-Control", "no-cache")
        .header("Connection", "keep-alive")
        .header("X-Accel-Buffering", "no") // 禁用nginx缓冲
        .body(body)
        .map_err(|e| AppError::Internal(format!("Failed to create SSE response: {}", e)))
}

fn to_sse_event(login: &LoginState) -> String {
    let data = serde_json::json!({ "email": login.email });
    format!("event: login_state\ndata: {}\n\n", data)
}
