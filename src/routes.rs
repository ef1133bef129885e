//! 路由注册
//! 创建所有 API 路由并应用中间件

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use crate::{handlers, middleware::AppState};

/// 请求体上限（凭证 JSON 很小）
const MAX_BODY_BYTES: usize = 16 * 1024;

/// 创建应用路由
pub fn create_router(state: Arc<AppState>) -> Router {
    // 公开端点（健康检查）
    let public_routes = Router::new().route("/health", get(handlers::health::health_check));

    let auth_routes = Router::new()
        .route("/api/v1/auth/authenticate", post(handlers::auth::authenticate))
        .route("/api/v1/auth/login", post(handlers::auth::login))
        .route("/api/v1/auth/logout", post(handlers::auth::logout));

    let session_routes = Router::new()
        .route("/api/v1/session", get(handlers::session::current_session))
        .route(
            "/api/v1/session/events",
            get(handlers::session::subscribe_session_events),
        )
        .route("/api/v1/greeting", get(handlers::greeting::greeting));

    Router::new()
        .merge(public_routes)
        .merge(auth_routes)
        .merge(session_routes)
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(
                    crate::middleware::request_tracking_middleware,
                ))
                .layer(CorsLayer::permissive())
                .layer(DefaultBodyLimit::max(MAX_BODY_BYTES)),
        )
        .with_state(state)
}
