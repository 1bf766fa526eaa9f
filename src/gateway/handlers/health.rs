//! Health check handler

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use axum::{Json, extract::State, http::StatusCode};
use utoipa::ToSchema;

use super::super::state::AppState;
use super::super::types::{ApiResponse, error_codes};

/// Health check response data
#[derive(serde::Serialize, serde::Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Server timestamp in milliseconds
    #[schema(example = 1703494800000_u64)]
    pub timestamp_ms: u64,
    /// Active storage backend
    #[schema(example = "postgres")]
    pub backend: String,
}

/// Health check endpoint
///
/// Pings PostgreSQL when it is the active backend. Internal details are
/// logged, not returned.
#[utoipa::path(
    get,
    path = "/live",
    responses(
        (status = 200, description = "Service healthy", body = ApiResponse<HealthResponse>, content_type = "application/json"),
        (status = 503, description = "Service unavailable")
    ),
    tag = "System"
)]
pub async fn health_check(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<ApiResponse<HealthResponse>>) {
    let now_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    if let Some(ref db) = state.pg_db
        && let Err(e) = db.health_check().await
    {
        tracing::error!("[HEALTH] PostgreSQL ping failed: {}", e);
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ApiResponse {
                code: error_codes::SERVICE_UNAVAILABLE,
                msg: "unavailable".to_string(),
                data: None,
            }),
        );
    }

    (
        StatusCode::OK,
        Json(ApiResponse::success(HealthResponse {
            timestamp_ms: now_ms,
            backend: state.wallets.backend().to_string(),
        })),
    )
}
