//! Wallet data model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Version assigned to a freshly created wallet
pub const WALLET_INITIAL_VERSION: i64 = 1;

/// Current state of one wallet.
///
/// `balance` is in minor units and never negative. `version` is the only
/// concurrency witness: it advances by exactly one on every successful
/// guarded update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Wallet {
    pub wallet_id: Uuid,
    pub owner_id: Option<Uuid>,
    pub balance: i64,
    pub version: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Wallet {
    /// Build a guarded update that applies `new_balance` only if the wallet is
    /// still at the version observed in this snapshot.
    pub fn propose_balance(&self, new_balance: i64) -> BalanceUpdate {
        BalanceUpdate {
            wallet_id: self.wallet_id,
            expected_version: self.version,
            new_balance,
        }
    }

    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.owner_id == Some(user_id)
    }
}

/// Input of [`WalletStore::guarded_update`](super::WalletStore::guarded_update)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalanceUpdate {
    pub wallet_id: Uuid,
    /// Version the caller read before computing `new_balance`
    pub expected_version: i64,
    pub new_balance: i64,
}
