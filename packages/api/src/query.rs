//! Retry policy for read queries.
//!
//! Reads are retried a few times on failure, the way a data-fetching cache
//! would: one second after the first failure, doubling each time, capped at
//! thirty seconds. A 401 is never retried: the token is already gone and the
//! session layer takes over.

use std::future::Future;
use std::time::Duration;

use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Extra attempts after the first failure.
    pub retries: u32,
    /// Wait before the first retry; doubles for every later one.
    pub base_delay: Duration,
    pub max_delay: Duration,
}

impl RetryPolicy {
    pub const DEFAULT: RetryPolicy = RetryPolicy {
        retries: 3,
        base_delay: Duration::from_secs(1),
        max_delay: Duration::from_secs(30),
    };
    pub const NONE: RetryPolicy = RetryPolicy {
        retries: 0,
        base_delay: Duration::ZERO,
        max_delay: Duration::ZERO,
    };

    fn should_retry(&self, attempt: u32, error: &ApiError) -> bool {
        attempt < self.retries && !error.is_unauthorized()
    }

    /// Delay before retry number `attempt` (zero-based).
    pub fn delay(&self, attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempt);
        self.base_delay.saturating_mul(factor).min(self.max_delay)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Run `fetch` until it succeeds, fails with a 401, or runs out of retries.
pub async fn with_retries<T, F, Fut>(policy: RetryPolicy, mut fetch: F) -> Result<T, ApiError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    let mut attempt = 0;
    loop {
        match fetch().await {
            Ok(value) => return Ok(value),
            Err(e) if policy.should_retry(attempt, &e) => {
                let delay = policy.delay(attempt);
                attempt += 1;
                tracing::debug!(
                    "query failed ({e}), retry {attempt}/{} in {delay:?}",
                    policy.retries
                );
                sleep(delay).await;
            }
            Err(e) => return Err(e),
        }
    }
}

async fn sleep(delay: Duration) {
    if delay.is_zero() {
        return;
    }
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(delay).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(delay).await;
}
