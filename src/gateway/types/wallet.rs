//! Wallet request/response DTOs
//!
//! Amounts cross the HTTP boundary as decimal strings with two fractional
//! digits and are converted to minor units here, never in the engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::ledger::{LedgerEntry, TransactionType};
use crate::money;
use crate::wallet::Wallet;

/// Deposit / withdraw request body
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct AmountRequest {
    /// Decimal amount, at most 2 fractional digits
    #[schema(example = "12.34")]
    pub amount: String,
}

impl AmountRequest {
    /// Amount in minor units
    pub fn minor_units(&self) -> Result<i64, money::MoneyError> {
        money::parse_amount(&self.amount)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WalletResponse {
    pub wallet_id: Uuid,
    pub owner_id: Option<Uuid>,
    /// Display balance
    #[schema(example = "12.34")]
    pub balance: String,
    /// Balance in minor units
    #[schema(example = 1234)]
    pub balance_minor: i64,
    pub version: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Wallet> for WalletResponse {
    fn from(w: Wallet) -> Self {
        Self {
            wallet_id: w.wallet_id,
            owner_id: w.owner_id,
            balance: money::format_minor(w.balance),
            balance_minor: w.balance,
            version: w.version,
            created_at: w.created_at,
            updated_at: w.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TransactionResponse {
    pub id: Uuid,
    pub wallet_id: Uuid,
    #[schema(example = "5.00")]
    pub amount: String,
    pub amount_minor: i64,
    pub transaction_type: TransactionType,
    #[schema(example = "17.34")]
    pub balance_snapshot: String,
    pub balance_snapshot_minor: i64,
    pub wallet_version: i64,
    pub created_at: DateTime<Utc>,
}

impl From<LedgerEntry> for TransactionResponse {
    fn from(e: LedgerEntry) -> Self {
        Self {
            id: e.id,
            wallet_id: e.wallet_id,
            amount: money::format_minor(e.amount),
            amount_minor: e.amount,
            transaction_type: e.transaction_type,
            balance_snapshot: money::format_minor(e.balance_snapshot),
            balance_snapshot_minor: e.balance_snapshot,
            wallet_version: e.wallet_version,
            created_at: e.created_at,
        }
    }
}
