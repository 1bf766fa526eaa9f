//! Wallet Error Types

use thiserror::Error;
use uuid::Uuid;

use crate::ledger::LedgerError;

/// PostgreSQL `lock_not_available`, raised when `lock_timeout` expires
const PG_LOCK_NOT_AVAILABLE: &str = "55P03";
/// PostgreSQL `query_canceled`, raised by `statement_timeout`
const PG_QUERY_CANCELED: &str = "57014";

/// Errors surfaced by the wallet stores and the mutation engine.
///
/// Every variant maps to a stable [`code`](WalletError::code) so callers can
/// branch on the kind without parsing messages.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WalletError {
    #[error("Wallet not found: {0}")]
    NotFound(Uuid),

    #[error("Amount must be a positive number of minor units")]
    InvalidAmount,

    #[error("Wallet owner is required")]
    InvalidOwner,

    #[error("Invalid transaction: {0}")]
    InvalidTransaction(String),

    #[error("Insufficient funds: balance {balance}, requested {requested}")]
    InsufficientFunds { balance: i64, requested: i64 },

    #[error("Wallet version mismatch: expected {expected}, found {actual}")]
    VersionConflict { expected: i64, actual: i64 },

    #[error("Timed out waiting for the wallet lock")]
    Timeout,

    #[error("Wallet does not belong to user")]
    Forbidden,

    #[error("Persistence error: {0}")]
    Persistence(String),
}

impl WalletError {
    /// Stable machine-checkable error kind
    pub fn code(&self) -> &'static str {
        match self {
            WalletError::NotFound(_) => "WALLET_NOT_FOUND",
            WalletError::InvalidAmount => "INVALID_AMOUNT",
            WalletError::InvalidOwner => "INVALID_OWNER",
            WalletError::InvalidTransaction(_) => "INVALID_TRANSACTION",
            WalletError::InsufficientFunds { .. } => "INSUFFICIENT_FUNDS",
            WalletError::VersionConflict { .. } => "VERSION_CONFLICT",
            WalletError::Timeout => "TIMEOUT",
            WalletError::Forbidden => "WALLET_FORBIDDEN",
            WalletError::Persistence(_) => "PERSISTENCE_ERROR",
        }
    }

    /// Whether re-running the whole business operation (re-read, re-validate,
    /// re-write) may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            WalletError::VersionConflict { .. } | WalletError::Timeout
        )
    }
}

impl From<sqlx::Error> for WalletError {
    fn from(e: sqlx::Error) -> Self {
        match &e {
            sqlx::Error::PoolTimedOut => WalletError::Timeout,
            sqlx::Error::Database(db)
                if matches!(
                    db.code().as_deref(),
                    Some(PG_LOCK_NOT_AVAILABLE) | Some(PG_QUERY_CANCELED)
                ) =>
            {
                WalletError::Timeout
            }
            _ => WalletError::Persistence(e.to_string()),
        }
    }
}

impl From<LedgerError> for WalletError {
    fn from(e: LedgerError) -> Self {
        match e {
            LedgerError::InvalidTransaction(msg) => WalletError::InvalidTransaction(msg),
            LedgerError::Persistence(msg) => WalletError::Persistence(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            WalletError::NotFound(Uuid::nil()).code(),
            "WALLET_NOT_FOUND"
        );
        assert_eq!(
            WalletError::InsufficientFunds {
                balance: 1,
                requested: 2
            }
            .code(),
            "INSUFFICIENT_FUNDS"
        );
        assert_eq!(
            WalletError::VersionConflict {
                expected: 1,
                actual: 2
            }
            .code(),
            "VERSION_CONFLICT"
        );
    }

    #[test]
    fn test_only_concurrency_errors_are_retryable() {
        assert!(
            WalletError::VersionConflict {
                expected: 3,
                actual: 4
            }
            .is_retryable()
        );
        assert!(WalletError::Timeout.is_retryable());
        assert!(!WalletError::InvalidAmount.is_retryable());
        assert!(!WalletError::Persistence("down".into()).is_retryable());
        assert!(
            !WalletError::InsufficientFunds {
                balance: 0,
                requested: 1
            }
            .is_retryable()
        );
    }

    #[test]
    fn test_pool_timeout_maps_to_timeout() {
        assert_eq!(
            WalletError::from(sqlx::Error::PoolTimedOut),
            WalletError::Timeout
        );
        assert!(matches!(
            WalletError::from(sqlx::Error::RowNotFound),
            WalletError::Persistence(_)
        ));
    }

    #[test]
    fn test_ledger_errors_convert() {
        assert_eq!(
            WalletError::from(LedgerError::InvalidTransaction("empty".into())),
            WalletError::InvalidTransaction("empty".into())
        );
        assert_eq!(
            WalletError::from(LedgerError::Persistence("io".into())),
            WalletError::Persistence("io".into())
        );
    }
}
