//! Ledger replay
//!
//! Folds a wallet's entries from a zero balance and checks that every
//! recorded snapshot is reproduced.

use thiserror::Error;
use uuid::Uuid;

use super::models::LedgerEntry;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReplayError {
    #[error("entry {entry_id}: expected snapshot {expected}, recorded {recorded}")]
    SnapshotMismatch {
        entry_id: Uuid,
        expected: i64,
        recorded: i64,
    },

    #[error("entry {entry_id}: balance would leave the valid range")]
    OutOfRange { entry_id: Uuid },

    #[error("entry {entry_id} belongs to wallet {found}, not {expected}")]
    ForeignEntry {
        entry_id: Uuid,
        expected: Uuid,
        found: Uuid,
    },
}

/// Replay `entries` (commit order) from balance 0.
///
/// Returns the final balance.
///
/// ```
/// use wallet_service::ledger::replay;
///
/// assert_eq!(replay(&[]), Ok(0));
/// ```
pub fn replay(entries: &[LedgerEntry]) -> Result<i64, ReplayError> {
    let Some(first) = entries.first() else {
        return Ok(0);
    };
    let wallet_id = first.wallet_id;

    entries.iter().try_fold(0i64, |balance, entry| {
        if entry.wallet_id != wallet_id {
            return Err(ReplayError::ForeignEntry {
                entry_id: entry.id,
                expected: wallet_id,
                found: entry.wallet_id,
            });
        }

        let next = entry
            .transaction_type
            .apply(balance, entry.amount)
            .ok_or(ReplayError::OutOfRange { entry_id: entry.id })?;

        if next != entry.balance_snapshot {
            return Err(ReplayError::SnapshotMismatch {
                entry_id: entry.id,
                expected: next,
                recorded: entry.balance_snapshot,
            });
        }
        Ok(next)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::TransactionType;
    use chrono::Utc;

    fn entry(wallet_id: Uuid, tx: TransactionType, amount: i64, snapshot: i64) -> LedgerEntry {
        LedgerEntry {
            id: Uuid::new_v4(),
            wallet_id,
            amount,
            transaction_type: tx,
            balance_snapshot: snapshot,
            wallet_version: 0,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_replay_reproduces_snapshots() {
        let w = Uuid::new_v4();
        let entries = vec![
            entry(w, TransactionType::Deposit, 500, 500),
            entry(w, TransactionType::Withdrawal, 200, 300),
            entry(w, TransactionType::Deposit, 50, 350),
        ];
        assert_eq!(replay(&entries), Ok(350));
    }

    #[test]
    fn test_replay_detects_mismatch() {
        let w = Uuid::new_v4();
        let entries = vec![
            entry(w, TransactionType::Deposit, 500, 500),
            entry(w, TransactionType::Withdrawal, 200, 200),
        ];
        let err = replay(&entries).unwrap_err();
        assert!(matches!(
            err,
            ReplayError::SnapshotMismatch {
                expected: 300,
                recorded: 200,
                ..
            }
        ));
    }

    #[test]
    fn test_replay_rejects_negative_balance() {
        let w = Uuid::new_v4();
        let entries = vec![entry(w, TransactionType::Withdrawal, 1, 0)];
        assert!(matches!(
            replay(&entries),
            Err(ReplayError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_replay_rejects_mixed_wallets() {
        let entries = vec![
            entry(Uuid::new_v4(), TransactionType::Deposit, 100, 100),
            entry(Uuid::new_v4(), TransactionType::Deposit, 100, 200),
        ];
        assert!(matches!(
            replay(&entries),
            Err(ReplayError::ForeignEntry { .. })
        ));
    }
}
