//! Ledger entry data model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

/// Direction of a balance mutation. Amounts are always positive; the type
/// carries the sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Deposit,
    Withdrawal,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Deposit => "deposit",
            TransactionType::Withdrawal => "withdrawal",
        }
    }

    /// Apply this mutation to `balance`. `None` on overflow or when the
    /// result would be negative.
    pub fn apply(&self, balance: i64, amount: i64) -> Option<i64> {
        let next = match self {
            TransactionType::Deposit => balance.checked_add(amount)?,
            TransactionType::Withdrawal => balance.checked_sub(amount)?,
        };
        (next >= 0).then_some(next)
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "deposit" => Ok(TransactionType::Deposit),
            "withdrawal" => Ok(TransactionType::Withdrawal),
            other => Err(format!("unknown transaction type: {}", other)),
        }
    }
}

/// Immutable record of one completed balance mutation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LedgerEntry {
    pub id: Uuid,
    pub wallet_id: Uuid,
    pub amount: i64,
    pub transaction_type: TransactionType,
    /// Wallet balance right after this mutation
    pub balance_snapshot: i64,
    /// Wallet version produced by this mutation
    pub wallet_version: i64,
    pub created_at: DateTime<Utc>,
}

/// Ledger entry before the store assigns its id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLedgerEntry {
    pub wallet_id: Uuid,
    pub amount: i64,
    pub transaction_type: TransactionType,
    pub balance_snapshot: i64,
    pub wallet_version: i64,
    pub created_at: DateTime<Utc>,
}

impl NewLedgerEntry {
    pub fn into_entry(self, id: Uuid) -> LedgerEntry {
        LedgerEntry {
            id,
            wallet_id: self.wallet_id,
            amount: self.amount,
            transaction_type: self.transaction_type,
            balance_snapshot: self.balance_snapshot,
            wallet_version: self.wallet_version,
            created_at: self.created_at,
        }
    }
}
