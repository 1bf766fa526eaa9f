//! Wallet endpoints
//!
//! Identity comes from the JWT middleware (`Claims` extension) and is passed
//! explicitly into the mutation engine. Mutations run through the
//! configured `ConflictRetry`, each attempt re-reading the wallet.

use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::{Path, State},
};
use uuid::Uuid;

use super::super::state::AppState;
use super::super::types::{
    AmountRequest, ApiError, ApiResponse, ApiResult, TransactionResponse, WalletResponse, created,
    error_codes, ok,
};
use crate::user_auth::Claims;

fn caller_id(claims: &Claims) -> Result<Uuid, ApiError> {
    claims
        .user_id()
        .ok_or_else(|| ApiError::unauthorized(error_codes::AUTH_FAILED, "Invalid token subject"))
}

fn parse_wallet_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::bad_request(format!("Invalid wallet id: {}", raw)))
}

fn parse_amount(req: &AmountRequest) -> Result<i64, ApiError> {
    req.minor_units().map_err(|e| {
        ApiError::new(
            axum::http::StatusCode::BAD_REQUEST,
            error_codes::INVALID_AMOUNT,
            format!("Invalid amount: {}", e),
        )
    })
}

/// Create a wallet owned by the caller
#[utoipa::path(
    post,
    path = "/v1/wallet",
    responses(
        (status = 201, description = "Wallet created", body = ApiResponse<WalletResponse>),
        (status = 401, description = "Unauthorized")
    ),
    security(("jwt_auth" = [])),
    tag = "Wallet"
)]
pub async fn create_wallet(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> ApiResult<WalletResponse> {
    let owner_id = caller_id(&claims)?;
    tracing::info!(user_id = %owner_id, "create wallet");

    let wallet = state.wallets.create_wallet(owner_id).await?;
    created(wallet.into())
}

/// Get a wallet owned by the caller
#[utoipa::path(
    get,
    path = "/v1/wallet/{wallet_id}",
    params(("wallet_id" = String, Path, description = "Wallet UUID")),
    responses(
        (status = 200, description = "Wallet", body = ApiResponse<WalletResponse>),
        (status = 400, description = "Malformed wallet id"),
        (status = 403, description = "Wallet belongs to another user"),
        (status = 404, description = "Wallet not found")
    ),
    security(("jwt_auth" = [])),
    tag = "Wallet"
)]
pub async fn get_wallet(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(wallet_id): Path<String>,
) -> ApiResult<WalletResponse> {
    let owner_id = caller_id(&claims)?;
    let wallet_id = parse_wallet_id(&wallet_id)?;

    let wallet = state.wallets.authorize(wallet_id, owner_id).await?;
    ok(wallet.into())
}

/// Deposit into a wallet owned by the caller
#[utoipa::path(
    post,
    path = "/v1/wallet/{wallet_id}/deposit",
    params(("wallet_id" = String, Path, description = "Wallet UUID")),
    request_body = AmountRequest,
    responses(
        (status = 200, description = "Deposit applied", body = ApiResponse<WalletResponse>),
        (status = 400, description = "Invalid amount or wallet id"),
        (status = 403, description = "Wallet belongs to another user"),
        (status = 404, description = "Wallet not found"),
        (status = 409, description = "Concurrent modification, retries exhausted"),
        (status = 503, description = "Timed out waiting for the wallet lock")
    ),
    security(("jwt_auth" = [])),
    tag = "Wallet"
)]
pub async fn deposit(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(wallet_id): Path<String>,
    Json(req): Json<AmountRequest>,
) -> ApiResult<WalletResponse> {
    let owner_id = caller_id(&claims)?;
    let wallet_id = parse_wallet_id(&wallet_id)?;
    let amount = parse_amount(&req)?;
    tracing::info!(wallet_id = %wallet_id, amount, "deposit");

    let wallets = state.wallets.as_ref();
    let wallet = state
        .retry
        .run(|| async move {
            wallets.authorize(wallet_id, owner_id).await?;
            wallets.deposit(wallet_id, amount).await
        })
        .await?;
    ok(wallet.into())
}

/// Withdraw from a wallet owned by the caller
#[utoipa::path(
    post,
    path = "/v1/wallet/{wallet_id}/withdraw",
    params(("wallet_id" = String, Path, description = "Wallet UUID")),
    request_body = AmountRequest,
    responses(
        (status = 200, description = "Withdrawal applied", body = ApiResponse<WalletResponse>),
        (status = 400, description = "Invalid amount or wallet id"),
        (status = 403, description = "Wallet belongs to another user"),
        (status = 404, description = "Wallet not found"),
        (status = 409, description = "Concurrent modification, retries exhausted"),
        (status = 422, description = "Insufficient funds"),
        (status = 503, description = "Timed out waiting for the wallet lock")
    ),
    security(("jwt_auth" = [])),
    tag = "Wallet"
)]
pub async fn withdraw(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(wallet_id): Path<String>,
    Json(req): Json<AmountRequest>,
) -> ApiResult<WalletResponse> {
    let owner_id = caller_id(&claims)?;
    let wallet_id = parse_wallet_id(&wallet_id)?;
    let amount = parse_amount(&req)?;
    tracing::info!(wallet_id = %wallet_id, amount, "withdraw");

    let wallets = state.wallets.as_ref();
    let wallet = state
        .retry
        .run(|| async move {
            wallets.authorize(wallet_id, owner_id).await?;
            wallets.withdraw(wallet_id, amount).await
        })
        .await?;
    ok(wallet.into())
}

/// Ledger history of a wallet owned by the caller
#[utoipa::path(
    get,
    path = "/v1/wallet/{wallet_id}/transactions",
    params(("wallet_id" = String, Path, description = "Wallet UUID")),
    responses(
        (status = 200, description = "Entries in commit order", body = ApiResponse<Vec<TransactionResponse>>),
        (status = 403, description = "Wallet belongs to another user"),
        (status = 404, description = "Wallet not found")
    ),
    security(("jwt_auth" = [])),
    tag = "Wallet"
)]
pub async fn get_transactions(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(wallet_id): Path<String>,
) -> ApiResult<Vec<TransactionResponse>> {
    let owner_id = caller_id(&claims)?;
    let wallet_id = parse_wallet_id(&wallet_id)?;

    state.wallets.authorize(wallet_id, owner_id).await?;
    let entries = state.wallets.transactions(wallet_id).await?;
    ok(entries.into_iter().map(Into::into).collect())
}
