//! OpenAPI / Swagger UI Documentation
//!
//! - Swagger UI: `http://localhost:8080/docs`
//! - OpenAPI JSON: `http://localhost:8080/api-docs/openapi.json`

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::gateway::handlers::HealthResponse;
use crate::gateway::types::{AmountRequest, TransactionResponse, WalletResponse};
use crate::ledger::TransactionType;
use crate::user_auth::{AuthResponse, LoginRequest, RegisterRequest, RegisterResponse};

/// Bearer JWT issued by `/v1/login`
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "jwt_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Main API Documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Wallet Service API",
        version = "1.0.0",
        description = "Wallet balances with optimistic concurrency control and an append-only ledger."
    ),
    servers(
        (url = "http://localhost:8080", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::health::health_check,
        crate::user_auth::handlers::register,
        crate::user_auth::handlers::login,
        crate::gateway::handlers::wallet::create_wallet,
        crate::gateway::handlers::wallet::get_wallet,
        crate::gateway::handlers::wallet::deposit,
        crate::gateway::handlers::wallet::withdraw,
        crate::gateway::handlers::wallet::get_transactions,
    ),
    components(
        schemas(
            HealthResponse,
            RegisterRequest,
            RegisterResponse,
            LoginRequest,
            AuthResponse,
            AmountRequest,
            WalletResponse,
            TransactionResponse,
            TransactionType,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Registration and login"),
        (name = "Wallet", description = "Wallet balance and ledger (JWT required)"),
        (name = "System", description = "Health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::OpenApi;

    #[test]
    fn test_openapi_spec_generates() {
        let spec = ApiDoc::openapi();
        assert_eq!(spec.info.title, "Wallet Service API");
        assert_eq!(spec.info.version, "1.0.0");
    }

    #[test]
    fn test_openapi_json_serializable() {
        let json_str = ApiDoc::openapi().to_json().unwrap();
        assert!(json_str.contains("Wallet Service API"));
    }

    #[test]
    fn test_endpoints_registered() {
        let paths = ApiDoc::openapi().paths;
        assert!(paths.paths.contains_key("/live"));
        assert!(paths.paths.contains_key("/v1/user"));
        assert!(paths.paths.contains_key("/v1/login"));
        assert!(paths.paths.contains_key("/v1/wallet/{wallet_id}/deposit"));
        assert!(paths.paths.contains_key("/v1/wallet/{wallet_id}/transactions"));
    }

    #[test]
    fn test_security_scheme_registered() {
        let components = ApiDoc::openapi().components.expect("should have components");
        assert!(components.security_schemes.contains_key("jwt_auth"));
    }
}
