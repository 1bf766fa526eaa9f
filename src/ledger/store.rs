use async_trait::async_trait;
use uuid::Uuid;

use super::error::LedgerError;
use super::models::{LedgerEntry, NewLedgerEntry};

/// Append-only storage for ledger entries. No update or delete exists.
#[async_trait]
pub trait LedgerStore: Send + Sync {
    /// Insert one entry. A second entry for the same `(wallet_id,
    /// wallet_version)` is rejected.
    async fn append(&self, entry: &NewLedgerEntry) -> Result<LedgerEntry, LedgerError>;

    /// All entries of a wallet in commit order
    async fn list_by_wallet(&self, wallet_id: Uuid) -> Result<Vec<LedgerEntry>, LedgerError>;
}
