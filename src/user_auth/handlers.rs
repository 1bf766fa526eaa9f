use axum::{Json, extract::State};
use std::sync::Arc;

use super::models::{AuthResponse, LoginRequest, RegisterRequest, RegisterResponse};
use crate::gateway::state::AppState;
use crate::gateway::types::{ApiResponse, ApiResult, created, ok};

/// Register a new user
///
/// POST /v1/user
#[utoipa::path(
    post,
    path = "/v1/user",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered successfully", body = ApiResponse<RegisterResponse>),
        (status = 400, description = "Invalid input"),
        (status = 409, description = "User already exists"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Auth"
)]
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<RegisterResponse> {
    tracing::info!("Registering user");

    let user_id = state.user_auth.register(req).await.inspect_err(|e| {
        tracing::warn!("Registration failed: {}", e);
    })?;
    created(RegisterResponse { user_id })
}

/// Login user
///
/// POST /v1/login
#[utoipa::path(
    post,
    path = "/v1/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = ApiResponse<AuthResponse>),
        (status = 401, description = "Invalid credentials"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Auth"
)]
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<AuthResponse> {
    let resp = state.user_auth.login(req).await.inspect_err(|e| {
        tracing::warn!("Login failed: {}", e);
    })?;
    ok(resp)
}
