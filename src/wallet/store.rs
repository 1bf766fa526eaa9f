//! Wallet Store
//!
//! Durable wallet state plus the guarded update primitive that every balance
//! mutation goes through.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use uuid::Uuid;

use super::error::WalletError;
use super::models::{BalanceUpdate, Wallet};

/// Storage backend for wallets
///
/// # Guarded update contract
/// `guarded_update` runs as one atomic unit: lock the wallet row, read its
/// version, fail with [`WalletError::VersionConflict`] if it differs from
/// `expected_version`, otherwise write the balance, bump the version by one
/// and refresh `updated_at`. On any failure the stored wallet is unchanged.
/// Conflicts are reported, never retried here.
///
/// `deadline` bounds the work before commit only. Running out of it yields
/// [`WalletError::Timeout`] with nothing written. Once the commit has been
/// issued the outcome is reported as it is, however long that takes, so a
/// `Timeout` always means the mutation did not happen.
#[async_trait]
pub trait WalletStore: Send + Sync {
    /// Backend name for logging
    fn name(&self) -> &'static str;

    /// Insert a wallet with balance 0 at the initial version
    async fn create(&self, owner_id: Option<Uuid>) -> Result<Wallet, WalletError>;

    /// Point lookup
    async fn get(&self, wallet_id: Uuid) -> Result<Wallet, WalletError>;

    /// Compare-version-then-write under an exclusive row lock.
    /// Returns the wallet as committed.
    async fn guarded_update(
        &self,
        update: &BalanceUpdate,
        deadline: Duration,
    ) -> Result<Wallet, WalletError>;
}

/// Run the pre-commit phase of a guarded update within `deadline`.
/// Dropping `work` on expiry must leave the wallet untouched.
pub async fn before_commit<T, F>(deadline: Duration, work: F) -> Result<T, WalletError>
where
    F: Future<Output = Result<T, WalletError>>,
{
    tokio::time::timeout(deadline, work)
        .await
        .map_err(|_| WalletError::Timeout)?
}
