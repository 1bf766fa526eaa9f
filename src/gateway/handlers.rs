//! HTTP handlers

pub mod health;
pub mod wallet;

pub use health::{HealthResponse, health_check};
pub use wallet::{create_wallet, deposit, get_transactions, get_wallet, withdraw};
