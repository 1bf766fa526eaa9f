//! Wallet state, the guarded update primitive and the mutation engine
//!
//! ```text
//! WalletService::deposit/withdraw
//!   -> validate amount, load snapshot, check funds
//!   -> WalletStore::guarded_update   (lock row, compare version, write)
//!   -> TransactionService::record    (append ledger entry)
//! ```

pub mod error;
pub mod memory;
pub mod models;
pub mod repository;
pub mod retry;
pub mod service;
pub mod store;

pub use error::WalletError;
pub use memory::MemoryWalletStore;
pub use models::{BalanceUpdate, WALLET_INITIAL_VERSION, Wallet};
pub use repository::PgWalletStore;
pub use retry::ConflictRetry;
pub use service::WalletService;
pub use store::WalletStore;
