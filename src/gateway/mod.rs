//! HTTP gateway
//!
//! Routes:
//! - `GET  /live`                          health
//! - `POST /v1/user`, `POST /v1/login`     registration and login
//! - `/v1/wallet/...`                      wallet operations (JWT required)
//! - `GET  /docs`                          Swagger UI

pub mod handlers;
pub mod openapi;
pub mod request_id;
pub mod state;
pub mod types;

use axum::{
    Router,
    middleware::{from_fn, from_fn_with_state},
    routing::{get, post},
};
use std::sync::Arc;
use tokio::net::TcpListener;

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::GatewayConfig;
use state::AppState;

/// Build the complete router
pub fn build_router(state: AppState) -> Router {
    let state = Arc::new(state);

    // ==========================================================================
    // Wallet Routes - Protected by JWT
    // ==========================================================================
    let wallet_routes = Router::new()
        .route("/", post(handlers::create_wallet))
        .route("/{wallet_id}", get(handlers::get_wallet))
        .route("/{wallet_id}/deposit", post(handlers::deposit))
        .route("/{wallet_id}/withdraw", post(handlers::withdraw))
        .route("/{wallet_id}/transactions", get(handlers::get_transactions))
        .layer(from_fn_with_state(
            state.clone(),
            crate::user_auth::middleware::jwt_auth_middleware,
        ));

    Router::new()
        // Health check
        .route("/live", get(handlers::health_check))
        // User Auth Routes
        .route("/v1/user", post(crate::user_auth::handlers::register))
        .route("/v1/login", post(crate::user_auth::handlers::login))
        .nest("/v1/wallet", wallet_routes)
        .with_state(state)
        // OpenAPI / Swagger UI (stateless, added after with_state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()))
        .layer(from_fn(request_id::request_id_middleware))
}

/// Serve until Ctrl-C
pub async fn run_server(config: &GatewayConfig, state: AppState) -> anyhow::Result<()> {
    let app = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr).await.map_err(|e| {
        anyhow::anyhow!(
            "Failed to bind to {}: {} (port {} may already be in use)",
            addr,
            e,
            config.port
        )
    })?;

    tracing::info!("Gateway listening on http://{}", addr);
    tracing::info!("API Docs: http://{}/docs", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        // Without a signal handler the server keeps running
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
