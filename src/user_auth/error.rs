use thiserror::Error;

/// PostgreSQL `unique_violation`
const PG_UNIQUE_VIOLATION: &str = "23505";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UserAuthError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("User already exists")]
    UserExists,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl UserAuthError {
    pub fn code(&self) -> &'static str {
        match self {
            UserAuthError::InvalidInput(_) => "INVALID_INPUT",
            UserAuthError::UserExists => "USER_EXISTS",
            UserAuthError::InvalidCredentials => "INVALID_CREDENTIALS",
            UserAuthError::InvalidToken => "INVALID_TOKEN",
            UserAuthError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<sqlx::Error> for UserAuthError {
    fn from(e: sqlx::Error) -> Self {
        match &e {
            sqlx::Error::Database(db) if db.code().as_deref() == Some(PG_UNIQUE_VIOLATION) => {
                UserAuthError::UserExists
            }
            _ => UserAuthError::Internal(e.to_string()),
        }
    }
}

impl From<jsonwebtoken::errors::Error> for UserAuthError {
    fn from(_: jsonwebtoken::errors::Error) -> Self {
        UserAuthError::InvalidToken
    }
}
