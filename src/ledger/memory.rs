//! In-memory ledger store

use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use super::error::LedgerError;
use super::models::{LedgerEntry, NewLedgerEntry};
use super::store::LedgerStore;

#[derive(Default)]
pub struct MemoryLedgerStore {
    entries: DashMap<Uuid, Vec<LedgerEntry>>,
}

impl MemoryLedgerStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LedgerStore for MemoryLedgerStore {
    async fn append(&self, entry: &NewLedgerEntry) -> Result<LedgerEntry, LedgerError> {
        let mut wallet_entries = self.entries.entry(entry.wallet_id).or_default();

        if wallet_entries
            .iter()
            .any(|e| e.wallet_version == entry.wallet_version)
        {
            return Err(LedgerError::already_recorded(entry.wallet_version));
        }

        let stored = entry.clone().into_entry(Uuid::new_v4());
        wallet_entries.push(stored.clone());
        Ok(stored)
    }

    async fn list_by_wallet(&self, wallet_id: Uuid) -> Result<Vec<LedgerEntry>, LedgerError> {
        let mut entries = self
            .entries
            .get(&wallet_id)
            .map(|e| e.value().clone())
            .unwrap_or_default();
        // Appends of concurrent mutations may land out of commit order
        entries.sort_by_key(|e| (e.created_at, e.wallet_version));
        Ok(entries)
    }
}
