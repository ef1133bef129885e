//! 测试公共模块
//! 提供测试配置、应用状态与 HTTP 辅助函数

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use http_body_util::BodyExt;
use login_flow::{
    config::{AppConfig, AuthConfig, LoggingConfig, ServerConfig},
    middleware::AppState,
    repository::CredentialStore,
};
use std::sync::Arc;
use tower::ServiceExt;

pub const DEMO_EMAIL: &str = "amitai@spectory.com";
pub const DEMO_PASSWORD: &str = "qwe123";

/// 创建测试配置
pub fn create_test_config(latency_ms: u64) -> AppConfig {
    AppConfig {
        server: ServerConfig {
            addr: "127.0.0.1:0".to_string(), // 使用随机端口
            graceful_shutdown_timeout_secs: 5,
        },
        logging: LoggingConfig {
            level: "debug".to_string(),
            format: "pretty".to_string(),
        },
        auth: AuthConfig {
            latency_ms,
            seed_file: None,
        },
    }
}

/// 创建测试应用状态（内置账户，无延迟）
pub fn create_test_app_state() -> Arc<AppState> {
    Arc::new(AppState::with_store(
        create_test_config(0),
        CredentialStore::seeded(),
    ))
}

pub fn create_test_app(state: Arc<AppState>) -> Router {
    login_flow::routes::create_router(state)
}

/// 发送 JSON POST 请求
pub async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

/// 发送任意请求
pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

/// 发送 GET 请求
pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    app.clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// 读取响应体为 JSON
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
