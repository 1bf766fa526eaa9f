use anyhow::{Context, Result};
use sqlx::PgPool;

const CREATE_USERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    user_id       UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    first_name    TEXT NOT NULL,
    last_name     TEXT NOT NULL,
    email         TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL,
    created_at    TIMESTAMPTZ NOT NULL DEFAULT NOW()
)"#;

const CREATE_WALLETS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS wallets (
    wallet_id  UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    owner_id   UUID REFERENCES users (user_id),
    balance    BIGINT NOT NULL DEFAULT 0 CHECK (balance >= 0),
    version    BIGINT NOT NULL DEFAULT 1,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
)"#;

const CREATE_WALLETS_OWNER_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS wallets_owner_idx ON wallets (owner_id)";

const CREATE_TRANSACTIONS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS transactions (
    id               UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    wallet_id        UUID NOT NULL REFERENCES wallets (wallet_id),
    amount           BIGINT NOT NULL CHECK (amount > 0),
    transaction_type TEXT NOT NULL CHECK (transaction_type IN ('deposit', 'withdrawal')),
    balance_snapshot BIGINT NOT NULL CHECK (balance_snapshot >= 0),
    wallet_version   BIGINT NOT NULL,
    created_at       TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    UNIQUE (wallet_id, wallet_version)
)"#;

/// Create tables if missing. Safe to run on every startup.
pub async fn init_schema(pool: &PgPool) -> Result<()> {
    tracing::info!("Initializing PostgreSQL schema...");

    for (name, ddl) in [
        ("users", CREATE_USERS_TABLE),
        ("wallets", CREATE_WALLETS_TABLE),
        ("wallets_owner_idx", CREATE_WALLETS_OWNER_INDEX),
        ("transactions", CREATE_TRANSACTIONS_TABLE),
    ] {
        sqlx::query(ddl)
            .execute(pool)
            .await
            .with_context(|| format!("Failed to create {}", name))?;
    }

    tracing::info!("PostgreSQL schema initialized successfully");
    Ok(())
}
