//! API Response types and error codes
//!
//! - `ApiResponse<T>`: Unified response wrapper
//! - `error_codes`: Standard error code constants
//! - `ApiError`: handler error rendered as an `ApiResponse<()>`

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::user_auth::UserAuthError;
use crate::wallet::WalletError;

// ============================================================================
// Unified API Response Format
// ============================================================================

/// Unified API response wrapper
///
/// All API responses follow this structure:
/// - code: 0 = success, non-zero = error code
/// - msg: short message description
/// - data: actual data (success) or null (error)
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response code: 0 for success, non-zero for errors
    #[schema(example = 0)]
    pub code: i32,
    /// Response message
    #[schema(example = "ok")]
    pub msg: String,
    /// Response data (only present when code == 0)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create success response
    pub fn success(data: T) -> Self {
        Self {
            code: error_codes::SUCCESS,
            msg: "ok".to_string(),
            data: Some(data),
        }
    }

    /// Create error response
    pub fn error(code: i32, msg: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            code,
            msg: msg.into(),
            data: None,
        }
    }
}

// ============================================================================
// Error Codes
// ============================================================================

pub mod error_codes {
    // Success
    pub const SUCCESS: i32 = 0;

    // Client errors (1xxx)
    pub const INVALID_PARAMETER: i32 = 1001;
    pub const INSUFFICIENT_FUNDS: i32 = 1002;
    pub const INVALID_AMOUNT: i32 = 1003;
    pub const INVALID_OWNER: i32 = 1004;
    pub const INVALID_TRANSACTION: i32 = 1005;
    pub const USER_EXISTS: i32 = 1006;

    // Auth errors (2xxx)
    pub const MISSING_AUTH: i32 = 2001;
    pub const AUTH_FAILED: i32 = 2002;
    pub const FORBIDDEN: i32 = 2003;

    // Resource errors (4xxx)
    pub const WALLET_NOT_FOUND: i32 = 4001;
    pub const VERSION_CONFLICT: i32 = 4091;

    // Server errors (5xxx)
    pub const INTERNAL_ERROR: i32 = 5000;
    pub const SERVICE_UNAVAILABLE: i32 = 5001;
    pub const TIMEOUT: i32 = 5003;
}

// ============================================================================
// Handler Errors
// ============================================================================

/// Error returned by handlers. Storage detail never reaches the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: i32,
    pub msg: String,
}

impl ApiError {
    pub fn new(status: StatusCode, code: i32, msg: impl Into<String>) -> Self {
        Self {
            status,
            code,
            msg: msg.into(),
        }
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, error_codes::INVALID_PARAMETER, msg)
    }

    pub fn unauthorized(code: i32, msg: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, code, msg)
    }

    pub fn internal() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            error_codes::INTERNAL_ERROR,
            "Internal server error",
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ApiResponse::<()>::error(self.code, self.msg)),
        )
            .into_response()
    }
}

impl From<WalletError> for ApiError {
    fn from(e: WalletError) -> Self {
        use error_codes::*;

        let (status, code) = match &e {
            WalletError::NotFound(_) => (StatusCode::NOT_FOUND, WALLET_NOT_FOUND),
            WalletError::InvalidAmount => (StatusCode::BAD_REQUEST, INVALID_AMOUNT),
            WalletError::InvalidOwner => (StatusCode::BAD_REQUEST, INVALID_OWNER),
            WalletError::InvalidTransaction(_) => (StatusCode::BAD_REQUEST, INVALID_TRANSACTION),
            WalletError::InsufficientFunds { .. } => {
                (StatusCode::UNPROCESSABLE_ENTITY, INSUFFICIENT_FUNDS)
            }
            WalletError::VersionConflict { .. } => (StatusCode::CONFLICT, VERSION_CONFLICT),
            WalletError::Timeout => (StatusCode::SERVICE_UNAVAILABLE, TIMEOUT),
            WalletError::Forbidden => (StatusCode::FORBIDDEN, FORBIDDEN),
            WalletError::Persistence(msg) => {
                tracing::error!(error = %msg, "wallet persistence failure");
                return ApiError::internal();
            }
        };
        ApiError::new(status, code, format!("{}: {}", e.code(), e))
    }
}

impl From<UserAuthError> for ApiError {
    fn from(e: UserAuthError) -> Self {
        use error_codes::*;

        let (status, code) = match &e {
            UserAuthError::InvalidInput(_) => (StatusCode::BAD_REQUEST, INVALID_PARAMETER),
            UserAuthError::UserExists => (StatusCode::CONFLICT, USER_EXISTS),
            UserAuthError::InvalidCredentials | UserAuthError::InvalidToken => {
                (StatusCode::UNAUTHORIZED, AUTH_FAILED)
            }
            UserAuthError::Internal(msg) => {
                tracing::error!(error = %msg, "auth failure");
                return ApiError::internal();
            }
        };
        ApiError::new(status, code, format!("{}: {}", e.code(), e))
    }
}

pub type ApiResult<T> = Result<(StatusCode, Json<ApiResponse<T>>), ApiError>;

pub fn ok<T>(data: T) -> ApiResult<T> {
    Ok((StatusCode::OK, Json(ApiResponse::success(data))))
}

pub fn created<T>(data: T) -> ApiResult<T> {
    Ok((StatusCode::CREATED, Json(ApiResponse::success(data))))
}
