//! Caller-side retry for concurrency failures
//!
//! The mutation engine reports `VersionConflict` and `Timeout` without
//! retrying. Callers that want another attempt re-run the whole business
//! operation (re-read, re-validate, re-write) through [`ConflictRetry`].

use std::future::Future;
use std::time::Duration;

use super::error::WalletError;

#[derive(Debug, Clone, Copy)]
pub struct ConflictRetry {
    max_attempts: u32,
    backoff: Duration,
}

impl ConflictRetry {
    /// `max_attempts` is clamped to at least one
    pub fn new(max_attempts: u32, backoff: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            backoff,
        }
    }

    /// Run `op` until it succeeds, fails with a non-retryable error, or the
    /// attempts are used up. Sleeps `backoff * attempt` between tries.
    pub async fn run<T, F, Fut>(&self, mut op: F) -> Result<T, WalletError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, WalletError>>,
    {
        let mut attempt = 1;
        loop {
            match op().await {
                Err(e) if e.is_retryable() && attempt < self.max_attempts => {
                    tracing::debug!(attempt, error = %e, "retrying wallet operation");
                    tokio::time::sleep(self.backoff * attempt).await;
                    attempt += 1;
                }
                result => return result,
            }
        }
    }
}

impl Default for ConflictRetry {
    fn default() -> Self {
        Self::new(3, Duration::from_millis(10))
    }
}
