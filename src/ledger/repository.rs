//! PostgreSQL ledger store

use async_trait::async_trait;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use super::error::LedgerError;
use super::models::{LedgerEntry, NewLedgerEntry, TransactionType};
use super::store::LedgerStore;

pub struct PgLedgerStore {
    pool: PgPool,
}

impl PgLedgerStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_entry(row: &sqlx::postgres::PgRow) -> Result<LedgerEntry, LedgerError> {
        let type_str: String = row.try_get("transaction_type")?;
        let transaction_type = type_str
            .parse::<TransactionType>()
            .map_err(LedgerError::Persistence)?;

        Ok(LedgerEntry {
            id: row.try_get("id")?,
            wallet_id: row.try_get("wallet_id")?,
            amount: row.try_get("amount")?,
            transaction_type,
            balance_snapshot: row.try_get("balance_snapshot")?,
            wallet_version: row.try_get("wallet_version")?,
            created_at: row.try_get("created_at")?,
        })
    }
}

#[async_trait]
impl LedgerStore for PgLedgerStore {
    async fn append(&self, entry: &NewLedgerEntry) -> Result<LedgerEntry, LedgerError> {
        let id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO transactions
                (wallet_id, amount, transaction_type, balance_snapshot, wallet_version, created_at)
            VALUES
                ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(entry.wallet_id)
        .bind(entry.amount)
        .bind(entry.transaction_type.as_str())
        .bind(entry.balance_snapshot)
        .bind(entry.wallet_version)
        .bind(entry.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match LedgerError::from(e) {
            LedgerError::InvalidTransaction(_) => {
                LedgerError::already_recorded(entry.wallet_version)
            }
            other => other,
        })?;

        Ok(entry.clone().into_entry(id))
    }

    async fn list_by_wallet(&self, wallet_id: Uuid) -> Result<Vec<LedgerEntry>, LedgerError> {
        let rows = sqlx::query(
            r#"
            SELECT id, wallet_id, amount, transaction_type, balance_snapshot,
                   wallet_version, created_at
            FROM transactions
            WHERE wallet_id = $1
            ORDER BY created_at ASC, wallet_version ASC
            "#,
        )
        .bind(wallet_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::row_to_entry).collect()
    }
}
