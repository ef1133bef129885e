//! 错误处理单元测试
//!
//! 测试应用错误类型的状态码、消息和响应格式

use axum::{http::StatusCode, response::IntoResponse};
use http_body_util::BodyExt;
use login_flow::error::{AppError, AuthError, ErrorDetail, ErrorResponse};

// ==================== 错误状态码测试 ====================

#[test]
fn test_error_status_codes() {
    assert_eq!(
        AppError::Authentication(AuthError::WrongCredentials).status_code(),
        StatusCode::UNAUTHORIZED
    );
    assert_eq!(AppError::NotLoggedIn.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        AppError::Config("Invalid config".to_string()).status_code(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
    assert_eq!(
        AppError::Internal("Something went wrong".to_string()).status_code(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

// ==================== 用户消息测试 ====================

#[test]
fn test_auth_error_does_not_reveal_which_field_failed() {
    let message = AppError::from(AuthError::WrongCredentials).user_message();
    assert_eq!(message, "Wrong login credentials");
    assert!(!message.to_lowercase().contains("password"));
    assert!(!message.to_lowercase().contains("email"));
}

#[test]
fn test_internal_error_hides_details() {
    let message = AppError::Internal("stream builder failed".to_string()).user_message();
    assert_eq!(message, "Internal server error");
}

#[test]
fn test_config_error_from_config_crate() {
    let error: AppError = config::ConfigError::Message("bad".to_string()).into();
    assert!(matches!(error, AppError::Config(msg) if msg == "bad"));
}

// ==================== 响应格式测试 ====================

#[test]
fn test_error_response_serialization() {
    let response = ErrorResponse {
        error: ErrorDetail {
            code: 401,
            message: "Wrong login credentials".to_string(),
            request_id: "req-1".to_string(),
        },
    };

    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["error"]["code"], 401);
    assert_eq!(json["error"]["message"], "Wrong login credentials");
    assert_eq!(json["error"]["request_id"], "req-1");
}

#[tokio::test]
async fn test_into_response() {
    let response = AppError::from(AuthError::WrongCredentials).into_response();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["error"]["message"], "Wrong login credentials");
    assert!(!json["error"]["request_id"].as_str().unwrap().is_empty());
}
