use std::future::Future;
use std::time::Duration;

use gq_core::{Error, ErrorKind, Result};
use tracing::{error, warn};

/// Bounded retry around a single fetch operation. Only rate-limit and server
/// failures are retried; everything else propagates on first occurrence.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    max_attempts: u32,
    base_delay_ms: u64,
    max_delay_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay_ms: 250,
            max_delay_ms: 10_000,
        }
    }
}

impl RetryPolicy {
    pub const fn new(max_attempts: u32, base_delay_ms: u64, max_delay_ms: u64) -> Self {
        Self {
            max_attempts,
            base_delay_ms,
            max_delay_ms,
        }
    }

    /// Capped exponential backoff: `base * 2^(attempt - 1)`, never exceeding
    /// the configured cap. Attempt 0 waits nothing.
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        if attempt == 0 {
            return Duration::ZERO;
        }
        let exponential = match 1u64.checked_shl(attempt - 1) {
            Some(factor) => self.base_delay_ms.saturating_mul(factor),
            None => u64::MAX,
        };
        Duration::from_millis(exponential.min(self.max_delay_ms))
    }

    /// Run `operation` up to `max_attempts` times. The final retryable
    /// failure propagates as-is; unclassified errors are wrapped as
    /// unexpected and never retried.
    pub async fn run<T, F, Fut>(&self, mut operation: F) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let mut attempts = 0;
        loop {
            match operation().await {
                Ok(value) => return Ok(value),
                Err(err) => match err.kind() {
                    ErrorKind::RateLimited | ErrorKind::ServerError => {
                        attempts += 1;
                        if attempts >= self.max_attempts {
                            error!("Max retries reached: {}", err);
                            return Err(err);
                        }
                        warn!("Retry {}/{} failed: {}", attempts, self.max_attempts, err);
                        tokio::time::sleep(self.delay_for_attempt(attempts)).await;
                    }
                    ErrorKind::ClientError => {
                        error!("Client error: {}", err);
                        return Err(err);
                    }
                    ErrorKind::Unexpected => {
                        error!("Unexpected error: {}", err);
                        return Err(wrap_unexpected(err));
                    }
                },
            }
        }
    }
}

fn wrap_unexpected(err: Error) -> Error {
    match err {
        err @ Error::Unexpected(_) => err,
        other => Error::Unexpected(other.to_string()),
    }
}
