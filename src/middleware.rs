//! HTTP 中间件
//! 应用状态与请求追踪

use axum::{
    extract::Request,
    http::{HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use std::time::Instant;
use tracing::Instrument;
use uuid::Uuid;

use crate::{
    config::AppConfig,
    error::AppError,
    repository::CredentialStore,
    services::{Authenticator, LoginFlowController},
    session::SessionStore,
};

/// 应用状态
///
/// 登录状态由 `session` 独占持有，`login_flow` 是唯一的写入方。
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub authenticator: Arc<Authenticator>,
    pub login_flow: Arc<LoginFlowController>,
    pub session: Arc<SessionStore>,
}

impl AppState {
    /// 根据配置装配所有服务
    pub fn from_config(config: AppConfig) -> Result<Self, AppError> {
        let store = match &config.auth.seed_file {
            Some(path) => CredentialStore::from_json_file(path)?,
            None => CredentialStore::seeded(),
        };

        Ok(Self::with_store(config, store))
    }

    pub fn with_store(config: AppConfig, store: CredentialStore) -> Self {
        let authenticator = Arc::new(Authenticator::new(Arc::new(store), config.auth.latency()));
        let session = Arc::new(SessionStore::new());
        let login_flow = Arc::new(LoginFlowController::new(
            authenticator.clone(),
            session.clone(),
        ));

        Self {
            config,
            authenticator,
            login_flow,
            session,
        }
    }
}

/// 请求追踪中间件
/// 为每个请求生成 trace_id 和 request_id，并记录指标
pub async fn request_tracking_middleware(req: Request, next: Next) -> Response {
    let trace_id = extract_or_generate_trace_id(req.headers());
    let request_id = Uuid::new_v4().to_string();

    let method = req.method().to_string();
    let uri = req.uri().to_string();

    let span = tracing::info_span!(
        "http_request",
        trace_id = %trace_id,
        request_id = %request_id,
        method = %method,
        uri = %uri,
    );

    async move {
        let start = Instant::now();

        let mut response = next.run(req).await;

        let elapsed = start.elapsed();
        let status = response.status().as_u16();

        // metrics 标签需要 'static 字符串
        let method_name = match method.as_str() {
            "GET" => "GET",
            "POST" => "POST",
            "OPTIONS" => "OPTIONS",
            _ => "UNKNOWN",
        };
        let status_code = match status {
            200 => "200",
            400 => "400",
            401 => "401",
            404 => "404",
            413 => "413",
            415 => "415",
            422 => "422",
            500 => "500",
            _ => "other",
        };

        metrics::counter!("http_requests_total", "method" => method_name, "status" => status_code)
            .increment(1);
        metrics::histogram!("http_request_duration_seconds").record(elapsed.as_secs_f64());

        tracing::info!(
            method = %method,
            uri = %uri,
            status = status,
            elapsed_ms = elapsed.as_millis(),
            "Request completed"
        );

        if let Ok(value) = HeaderValue::from_str(&trace_id) {
            response.headers_mut().insert("x-trace-id", value);
        }
        if let Ok(value) = HeaderValue::from_str(&request_id) {
            response.headers_mut().insert("x-request-id", value);
        }

        response
    }
    .instrument(span)
    .await
}

/// 从请求头中提取或生成 trace_id
fn extract_or_generate_trace_id(headers: &HeaderMap) -> String {
    headers
        .get("x-trace-id")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_or_generate_trace_id() {
        let mut headers = HeaderMap::new();
        headers.insert("x-trace-id", "test-trace-123".parse().unwrap());

        let trace_id = extract_or_generate_trace_id(&headers);
        assert_eq!(trace_id, "test-trace-123");

        let headers = HeaderMap::new();
        let trace_id = extract_or_generate_trace_id(&headers);
        assert!(!trace_id.is_empty());
        assert_ne!(trace_id, "test-trace-123");
    }
}
