//! Wallet Service
//!
//! Wallet balances mutated under optimistic concurrency control, with an
//! append-only ledger of every completed mutation.
//!
//! # Modules
//!
//! - [`wallet`] - Wallet state, guarded update, mutation engine
//! - [`ledger`] - Append-only transaction ledger and replay
//! - [`money`] - Decimal string <-> minor unit conversion
//! - [`user_auth`] - Registration, login, JWT
//! - [`gateway`] - HTTP API
//! - [`db`] - PostgreSQL pool and schema
//! - [`config`] / [`logging`] - Startup configuration and tracing setup

pub mod config;
pub mod db;
pub mod gateway;
pub mod ledger;
pub mod logging;
pub mod money;
pub mod user_auth;
pub mod wallet;

// Convenient re-exports at crate root
pub use ledger::{LedgerEntry, TransactionService, TransactionType};
pub use wallet::{ConflictRetry, Wallet, WalletError, WalletService};
