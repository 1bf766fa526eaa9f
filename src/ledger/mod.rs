//! Append-only ledger of completed balance mutations

pub mod error;
pub mod memory;
pub mod models;
pub mod replay;
pub mod repository;
pub mod service;
pub mod store;

pub use error::LedgerError;
pub use memory::MemoryLedgerStore;
pub use models::{LedgerEntry, NewLedgerEntry, TransactionType};
pub use replay::{ReplayError, replay};
pub use repository::PgLedgerStore;
pub use service::TransactionService;
pub use store::LedgerStore;
