use std::sync::Arc;

use anyhow::Context;

use crate::config::{AppConfig, AuthConfig, StorageBackend, WalletConfig};
use crate::db::{Database, schema};
use crate::ledger::{MemoryLedgerStore, PgLedgerStore, TransactionService};
use crate::user_auth::{MemoryUserStore, PgUserStore, UserAuthService};
use crate::wallet::{ConflictRetry, MemoryWalletStore, PgWalletStore, WalletService};

/// Gateway application state (shared)
#[derive(Clone)]
pub struct AppState {
    /// Mutation engine
    pub wallets: Arc<WalletService>,
    /// Registration, login and token verification
    pub user_auth: Arc<UserAuthService>,
    /// Retry policy for mutations that hit a version conflict or timeout
    pub retry: ConflictRetry,
    /// PostgreSQL pool (None on the memory backend)
    pub pg_db: Option<Arc<Database>>,
}

impl AppState {
    pub fn new(
        wallets: Arc<WalletService>,
        user_auth: Arc<UserAuthService>,
        retry: ConflictRetry,
        pg_db: Option<Arc<Database>>,
    ) -> Self {
        Self {
            wallets,
            user_auth,
            retry,
            pg_db,
        }
    }

    /// State backed by the in-memory stores
    pub fn in_memory(wallet: &WalletConfig, auth: AuthConfig) -> Self {
        let transactions = Arc::new(TransactionService::new(Arc::new(MemoryLedgerStore::new())));
        let wallets = Arc::new(WalletService::new(
            Arc::new(MemoryWalletStore::new()),
            transactions,
            wallet.update_timeout(),
        ));
        let user_auth = Arc::new(UserAuthService::new(Arc::new(MemoryUserStore::new()), auth));

        Self::new(wallets, user_auth, retry_policy(wallet), None)
    }

    /// State backed by PostgreSQL. Connects and creates the schema.
    pub async fn postgres(config: &AppConfig) -> anyhow::Result<Self> {
        let db = Database::from_config(&config.storage)
            .await
            .context("Failed to connect to PostgreSQL")?;
        schema::init_schema(db.pool()).await?;

        let pool = db.pool().clone();
        let transactions = Arc::new(TransactionService::new(Arc::new(PgLedgerStore::new(
            pool.clone(),
        ))));
        let wallets = Arc::new(WalletService::new(
            Arc::new(PgWalletStore::new(pool.clone(), config.wallet.lock_timeout())),
            transactions,
            config.wallet.update_timeout(),
        ));
        let user_auth = Arc::new(UserAuthService::new(
            Arc::new(PgUserStore::new(pool)),
            config.auth.clone(),
        ));

        Ok(Self::new(
            wallets,
            user_auth,
            retry_policy(&config.wallet),
            Some(Arc::new(db)),
        ))
    }

    /// State for the backend selected in `storage.backend`
    pub async fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        match config.storage.backend {
            StorageBackend::Postgres => Self::postgres(config).await,
            StorageBackend::Memory => Ok(Self::in_memory(&config.wallet, config.auth.clone())),
        }
    }
}

fn retry_policy(wallet: &WalletConfig) -> ConflictRetry {
    ConflictRetry::new(wallet.conflict_retries, wallet.retry_backoff())
}
