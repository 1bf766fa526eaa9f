//! Mutation engine
//!
//! Business rules for create/deposit/withdraw. Every balance change is
//! validated against a wallet snapshot, committed through the store's guarded
//! update and then recorded in the ledger.
//!
//! The guarded update and the ledger append are two separate durable writes.
//! If the append fails after the update committed, the new balance stays and
//! the failure is logged with the wallet id and version.

use std::sync::Arc;
use std::time::Duration;

use uuid::Uuid;

use super::error::WalletError;
use super::models::Wallet;
use super::store::WalletStore;
use crate::ledger::{LedgerEntry, NewLedgerEntry, TransactionService, TransactionType};

pub struct WalletService {
    store: Arc<dyn WalletStore>,
    transactions: Arc<TransactionService>,
    update_timeout: Duration,
}

impl WalletService {
    pub fn new(
        store: Arc<dyn WalletStore>,
        transactions: Arc<TransactionService>,
        update_timeout: Duration,
    ) -> Self {
        Self {
            store,
            transactions,
            update_timeout,
        }
    }

    pub fn backend(&self) -> &'static str {
        self.store.name()
    }

    pub async fn create_wallet(&self, owner_id: Uuid) -> Result<Wallet, WalletError> {
        if owner_id.is_nil() {
            return Err(WalletError::InvalidOwner);
        }

        let wallet = self.store.create(Some(owner_id)).await?;
        tracing::info!(
            wallet_id = %wallet.wallet_id,
            owner_id = %owner_id,
            "wallet created"
        );
        Ok(wallet)
    }

    pub async fn get_wallet(&self, wallet_id: Uuid) -> Result<Wallet, WalletError> {
        self.store.get(wallet_id).await
    }

    /// Load a wallet on behalf of `owner_id`. Fails with `Forbidden` when the
    /// wallet belongs to someone else.
    pub async fn authorize(&self, wallet_id: Uuid, owner_id: Uuid) -> Result<Wallet, WalletError> {
        let wallet = self.store.get(wallet_id).await?;
        if !wallet.is_owned_by(owner_id) {
            tracing::warn!(wallet_id = %wallet_id, user_id = %owner_id, "wallet access denied");
            return Err(WalletError::Forbidden);
        }
        Ok(wallet)
    }

    /// Credit `amount` minor units. Returns the wallet as committed.
    pub async fn deposit(&self, wallet_id: Uuid, amount: i64) -> Result<Wallet, WalletError> {
        if amount <= 0 {
            return Err(WalletError::InvalidAmount);
        }

        let wallet = self.store.get(wallet_id).await?;
        let new_balance = wallet
            .balance
            .checked_add(amount)
            .ok_or(WalletError::InvalidAmount)?;

        self.apply(&wallet, TransactionType::Deposit, amount, new_balance)
            .await
    }

    /// Debit `amount` minor units. The funds check and the new balance are
    /// both computed from the same snapshot; a stale snapshot is caught by
    /// the version comparison.
    pub async fn withdraw(&self, wallet_id: Uuid, amount: i64) -> Result<Wallet, WalletError> {
        if amount <= 0 {
            return Err(WalletError::InvalidAmount);
        }

        let wallet = self.store.get(wallet_id).await?;
        if amount > wallet.balance {
            return Err(WalletError::InsufficientFunds {
                balance: wallet.balance,
                requested: amount,
            });
        }

        let new_balance = wallet.balance - amount;
        if new_balance < 0 {
            return Err(WalletError::InsufficientFunds {
                balance: wallet.balance,
                requested: amount,
            });
        }

        self.apply(&wallet, TransactionType::Withdrawal, amount, new_balance)
            .await
    }

    /// Ledger entries of an existing wallet in commit order
    pub async fn transactions(&self, wallet_id: Uuid) -> Result<Vec<LedgerEntry>, WalletError> {
        self.store.get(wallet_id).await?;
        Ok(self.transactions.history(wallet_id).await?)
    }

    async fn apply(
        &self,
        snapshot: &Wallet,
        tx_type: TransactionType,
        amount: i64,
        new_balance: i64,
    ) -> Result<Wallet, WalletError> {
        let update = snapshot.propose_balance(new_balance);

        // The deadline covers lock wait and write, never the commit: a
        // Timeout from the store means nothing was written.
        let updated = match self.store.guarded_update(&update, self.update_timeout).await {
            Ok(wallet) => wallet,
            Err(e) => {
                log_update_failure(&e, snapshot, tx_type, self.update_timeout);
                return Err(e);
            }
        };

        let entry = NewLedgerEntry {
            wallet_id: updated.wallet_id,
            amount,
            transaction_type: tx_type,
            balance_snapshot: updated.balance,
            wallet_version: updated.version,
            created_at: updated.updated_at,
        };

        if let Err(e) = self.transactions.record(&entry).await {
            tracing::error!(
                wallet_id = %updated.wallet_id,
                version = updated.version,
                tx_type = %tx_type,
                amount,
                balance = updated.balance,
                error = %e,
                "balance committed but ledger append failed"
            );
            return Err(e.into());
        }

        tracing::info!(
            wallet_id = %updated.wallet_id,
            version = updated.version,
            tx_type = %tx_type,
            amount,
            balance = updated.balance,
            "wallet mutated"
        );
        Ok(updated)
    }
}

fn log_update_failure(
    e: &WalletError,
    snapshot: &Wallet,
    tx_type: TransactionType,
    deadline: Duration,
) {
    match e {
        WalletError::Timeout => tracing::warn!(
            wallet_id = %snapshot.wallet_id,
            version = snapshot.version,
            timeout_ms = deadline.as_millis() as u64,
            "guarded update timed out before commit"
        ),
        WalletError::VersionConflict { expected, actual } => tracing::warn!(
            wallet_id = %snapshot.wallet_id,
            expected = *expected,
            actual = *actual,
            tx_type = %tx_type,
            "version conflict"
        ),
        WalletError::Persistence(msg) => tracing::error!(
            wallet_id = %snapshot.wallet_id,
            tx_type = %tx_type,
            error = %msg,
            "guarded update failed"
        ),
        other => tracing::debug!(
            wallet_id = %snapshot.wallet_id,
            error = %other,
            "guarded update rejected"
        ),
    }
}
