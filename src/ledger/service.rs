//! Transaction recorder
//!
//! Single funnel for ledger writes. Entries are validated here and then
//! handed to the store, which only ever inserts.

use std::sync::Arc;

use uuid::Uuid;

use super::error::LedgerError;
use super::models::{LedgerEntry, NewLedgerEntry};
use super::store::LedgerStore;
use crate::wallet::WALLET_INITIAL_VERSION;

pub struct TransactionService {
    store: Arc<dyn LedgerStore>,
}

impl TransactionService {
    pub fn new(store: Arc<dyn LedgerStore>) -> Self {
        Self { store }
    }

    /// Validate and append one entry
    pub async fn record(&self, entry: &NewLedgerEntry) -> Result<LedgerEntry, LedgerError> {
        validate(entry)?;

        let stored = self.store.append(entry).await?;
        tracing::debug!(
            wallet_id = %stored.wallet_id,
            version = stored.wallet_version,
            tx_type = %stored.transaction_type,
            amount = stored.amount,
            "ledger entry recorded"
        );
        Ok(stored)
    }

    /// Entries of one wallet in commit order
    pub async fn history(&self, wallet_id: Uuid) -> Result<Vec<LedgerEntry>, LedgerError> {
        self.store.list_by_wallet(wallet_id).await
    }
}

fn validate(entry: &NewLedgerEntry) -> Result<(), LedgerError> {
    if entry.wallet_id.is_nil() {
        return Err(LedgerError::InvalidTransaction(
            "wallet id is required".to_string(),
        ));
    }
    if entry.amount <= 0 {
        return Err(LedgerError::InvalidTransaction(
            "amount must be positive".to_string(),
        ));
    }
    if entry.balance_snapshot < 0 {
        return Err(LedgerError::InvalidTransaction(
            "balance snapshot cannot be negative".to_string(),
        ));
    }
    // A recorded mutation always produced a version past the initial one
    if entry.wallet_version <= WALLET_INITIAL_VERSION {
        return Err(LedgerError::InvalidTransaction(format!(
            "wallet version {} does not belong to a mutation",
            entry.wallet_version
        )));
    }
    Ok(())
}
