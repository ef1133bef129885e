//! 问候处理器

use crate::{error::AppError, middleware::AppState, models::auth::GreetingResponse};
use axum::{extract::State, Json};
use std::sync::Arc;

pub async fn greeting(
    State(state): State<Arc<AppState>>,
) -> Result<Json<GreetingResponse>, AppError> {
    let login = state.session.current();
    if !login.is_logged_in() {
        return Err(AppError::NotLoggedIn);
    }

    Ok(Json(GreetingResponse {
        greeting: format!("Hi {}", login.email),
    }))
}
