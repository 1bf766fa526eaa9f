use thiserror::Error;

/// PostgreSQL `unique_violation`
const PG_UNIQUE_VIOLATION: &str = "23505";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("{0}")]
    InvalidTransaction(String),

    #[error("Ledger persistence error: {0}")]
    Persistence(String),
}

impl LedgerError {
    pub(crate) fn already_recorded(wallet_version: i64) -> Self {
        LedgerError::InvalidTransaction(format!(
            "an entry for wallet version {} is already recorded",
            wallet_version
        ))
    }
}

impl From<sqlx::Error> for LedgerError {
    fn from(e: sqlx::Error) -> Self {
        match &e {
            sqlx::Error::Database(db) if db.code().as_deref() == Some(PG_UNIQUE_VIOLATION) => {
                LedgerError::InvalidTransaction("entry already recorded".to_string())
            }
            _ => LedgerError::Persistence(e.to_string()),
        }
    }
}
