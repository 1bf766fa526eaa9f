//! In-memory wallet store
//!
//! Same contract as the PostgreSQL store. The dashmap entry guard plays the
//! role of the row lock: it serializes guarded updates on one wallet while
//! wallets in other shards proceed in parallel.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use uuid::Uuid;

use super::error::WalletError;
use super::models::{BalanceUpdate, WALLET_INITIAL_VERSION, Wallet};
use super::store::WalletStore;

#[derive(Default)]
pub struct MemoryWalletStore {
    wallets: DashMap<Uuid, Wallet>,
}

impl MemoryWalletStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WalletStore for MemoryWalletStore {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn create(&self, owner_id: Option<Uuid>) -> Result<Wallet, WalletError> {
        let now = Utc::now();
        let wallet = Wallet {
            wallet_id: Uuid::new_v4(),
            owner_id,
            balance: 0,
            version: WALLET_INITIAL_VERSION,
            created_at: now,
            updated_at: now,
        };
        self.wallets.insert(wallet.wallet_id, wallet.clone());
        Ok(wallet)
    }

    async fn get(&self, wallet_id: Uuid) -> Result<Wallet, WalletError> {
        self.wallets
            .get(&wallet_id)
            .map(|w| w.value().clone())
            .ok_or(WalletError::NotFound(wallet_id))
    }

    // Nothing here awaits: the entry guard is taken and released within one
    // poll, so there is no pre-commit phase for the deadline to bound.
    async fn guarded_update(
        &self,
        update: &BalanceUpdate,
        _deadline: Duration,
    ) -> Result<Wallet, WalletError> {
        if update.new_balance < 0 {
            return Err(WalletError::InvalidAmount);
        }

        let mut wallet = self
            .wallets
            .get_mut(&update.wallet_id)
            .ok_or(WalletError::NotFound(update.wallet_id))?;

        if wallet.version != update.expected_version {
            return Err(WalletError::VersionConflict {
                expected: update.expected_version,
                actual: wallet.version,
            });
        }

        wallet.balance = update.new_balance;
        wallet.version += 1;
        wallet.updated_at = Utc::now().max(wallet.updated_at);

        Ok(wallet.value().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEADLINE: Duration = Duration::from_secs(1);

    #[tokio::test]
    async fn test_create_starts_empty() {
        let store = MemoryWalletStore::new();
        let owner = Uuid::new_v4();
        let wallet = store.create(Some(owner)).await.unwrap();
        assert_eq!(wallet.balance, 0);
        assert_eq!(wallet.version, WALLET_INITIAL_VERSION);
        assert_eq!(wallet.owner_id, Some(owner));
        assert_eq!(wallet.created_at, wallet.updated_at);
        assert_eq!(store.get(wallet.wallet_id).await.unwrap(), wallet);
    }

    #[tokio::test]
    async fn test_get_unknown_wallet() {
        let store = MemoryWalletStore::new();
        let id = Uuid::new_v4();
        assert_eq!(store.get(id).await, Err(WalletError::NotFound(id)));
    }

    #[tokio::test]
    async fn test_guarded_update_bumps_version_by_one() {
        let store = MemoryWalletStore::new();
        let wallet = store.create(None).await.unwrap();

        let updated = store
            .guarded_update(&wallet.propose_balance(500), DEADLINE)
            .await
            .unwrap();
        assert_eq!(updated.balance, 500);
        assert_eq!(updated.version, WALLET_INITIAL_VERSION + 1);
        assert_eq!(updated.created_at, wallet.created_at);
        assert!(updated.updated_at >= wallet.updated_at);
    }

    #[tokio::test]
    async fn test_stale_snapshot_conflicts_without_writing() {
        let store = MemoryWalletStore::new();
        let stale = store.create(None).await.unwrap();
        store
            .guarded_update(&stale.propose_balance(100), DEADLINE)
            .await
            .unwrap();

        let result = store
            .guarded_update(&stale.propose_balance(50), DEADLINE)
            .await;
        assert_eq!(
            result,
            Err(WalletError::VersionConflict {
                expected: WALLET_INITIAL_VERSION,
                actual: WALLET_INITIAL_VERSION + 1
            })
        );

        let current = store.get(stale.wallet_id).await.unwrap();
        assert_eq!(current.balance, 100);
        assert_eq!(current.version, WALLET_INITIAL_VERSION + 1);
    }

    #[tokio::test]
    async fn test_negative_balance_never_stored() {
        let store = MemoryWalletStore::new();
        let wallet = store.create(None).await.unwrap();
        let result = store
            .guarded_update(&wallet.propose_balance(-1), DEADLINE)
            .await;
        assert_eq!(result, Err(WalletError::InvalidAmount));
        assert_eq!(store.get(wallet.wallet_id).await.unwrap(), wallet);
    }

    #[tokio::test]
    async fn test_update_unknown_wallet() {
        let store = MemoryWalletStore::new();
        let update = BalanceUpdate {
            wallet_id: Uuid::new_v4(),
            expected_version: WALLET_INITIAL_VERSION,
            new_balance: 10,
        };
        assert_eq!(
            store.guarded_update(&update, DEADLINE).await,
            Err(WalletError::NotFound(update.wallet_id))
        );
    }
}
