use axum::{
    body::Body,
    extract::State,
    http::{Request, header},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::gateway::{
    state::AppState,
    types::{ApiError, error_codes},
};

/// Resolve the caller once and insert its `Claims` into the request
/// extensions for the handlers.
pub async fn jwt_auth_middleware(
    State(state): State<Arc<AppState>>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    // 1. Extract Authorization header
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            ApiError::unauthorized(error_codes::MISSING_AUTH, "Missing Authorization header")
        })?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| ApiError::unauthorized(error_codes::AUTH_FAILED, "Invalid token format"))?;

    // 2. Verify Token
    let claims = state.user_auth.verify_token(token).map_err(|e| {
        tracing::debug!("Token rejected: {}", e);
        ApiError::from(e)
    })?;

    // 3. Inject caller identity
    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}
