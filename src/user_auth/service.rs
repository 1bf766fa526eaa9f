use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use std::sync::Arc;
use uuid::Uuid;

use super::error::UserAuthError;
use super::models::{AuthResponse, Claims, LoginRequest, NewUser, RegisterRequest, User};
use super::store::UserStore;
use crate::config::AuthConfig;

const MIN_PASSWORD_LEN: usize = 8;

pub struct UserAuthService {
    store: Arc<dyn UserStore>,
    config: AuthConfig,
}

impl UserAuthService {
    pub fn new(store: Arc<dyn UserStore>, config: AuthConfig) -> Self {
        Self { store, config }
    }

    /// Register a new user
    pub async fn register(&self, req: RegisterRequest) -> Result<Uuid, UserAuthError> {
        if req.first_name.trim().is_empty()
            || req.last_name.trim().is_empty()
            || req.email.trim().is_empty()
        {
            return Err(UserAuthError::InvalidInput(
                "first_name, last_name and email are required".to_string(),
            ));
        }
        if req.password.len() < MIN_PASSWORD_LEN {
            return Err(UserAuthError::InvalidInput(format!(
                "password must be at least {} characters",
                MIN_PASSWORD_LEN
            )));
        }

        // 1. Hash password
        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(req.password.as_bytes(), &salt)
            .map_err(|e| UserAuthError::Internal(format!("Hashing failed: {}", e)))?
            .to_string();

        // 2. Insert
        let user = self
            .store
            .create(NewUser {
                first_name: req.first_name,
                last_name: req.last_name,
                email: req.email,
                password_hash,
            })
            .await?;

        tracing::info!(user_id = %user.user_id, "user registered");
        Ok(user.user_id)
    }

    /// Login user and issue JWT
    pub async fn login(&self, req: LoginRequest) -> Result<AuthResponse, UserAuthError> {
        // 1. Find user by email
        let user = self
            .store
            .get_by_email(&req.email)
            .await?
            .ok_or(UserAuthError::InvalidCredentials)?;

        // 2. Verify password
        let parsed_hash = PasswordHash::new(&user.password_hash)
            .map_err(|e| UserAuthError::Internal(format!("Invalid hash format: {}", e)))?;

        Argon2::default()
            .verify_password(req.password.as_bytes(), &parsed_hash)
            .map_err(|_| UserAuthError::InvalidCredentials)?;

        // 3. Generate JWT
        let token = self.issue_token(&user)?;

        Ok(AuthResponse {
            token,
            user_id: user.user_id,
            email: user.email,
        })
    }

    /// Verify JWT token
    pub fn verify_token(&self, token: &str) -> Result<Claims, UserAuthError> {
        let decoding_key = DecodingKey::from_secret(self.config.jwt_secret.as_bytes());
        let validation = Validation::new(Algorithm::HS256);
        let token_data = decode::<Claims>(token, &decoding_key, &validation)?;
        Ok(token_data.claims)
    }

    fn issue_token(&self, user: &User) -> Result<String, UserAuthError> {
        let now = Utc::now();
        let expiration = now
            .checked_add_signed(Duration::hours(self.config.token_ttl_hours))
            .ok_or_else(|| UserAuthError::Internal("token expiry out of range".to_string()))?;

        let claims = Claims {
            sub: user.user_id.to_string(),
            email: user.email.clone(),
            exp: expiration.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.config.jwt_secret.as_bytes()),
        )
        .map_err(|e| UserAuthError::Internal(format!("Failed to generate token: {}", e)))
    }
}
