//! Client-side token bucket.

use std::sync::atomic::{AtomicUsize, Ordering};

use tokio::sync::Mutex;
use tokio::time::{Duration, Instant};

use super::config::RateLimitPolicy;
use crate::{Error, Result};

/// Token bucket shared by every request of one client.
#[derive(Debug)]
pub(crate) struct RateLimiter {
    policy: RateLimitPolicy,
    state: Mutex<Bucket>,
    waiting: AtomicUsize,
}

#[derive(Debug)]
struct Bucket {
    tokens: u32,
    last_refill: Instant,
}

impl RateLimiter {
    pub(crate) fn new(policy: RateLimitPolicy) -> Result<Self> {
        policy.validate()?;
        Ok(Self {
            state: Mutex::new(Bucket {
                tokens: policy.capacity,
                last_refill: Instant::now(),
            }),
            policy,
            waiting: AtomicUsize::new(0),
        })
    }

    /// Take one token, sleeping until one is available.
    ///
    /// Waiting callers poll the bucket after each sleep, so ordering is not
    /// FIFO: a fresh caller can take a refilled token ahead of them.
    pub(crate) async fn acquire(&self) -> Result<()> {
        if self.try_take().await.is_ok() {
            return Ok(());
        }

        if self.waiting.fetch_add(1, Ordering::SeqCst) >= self.policy.queue_limit {
            self.waiting.fetch_sub(1, Ordering::SeqCst);
            return Err(Error::RateLimitQueueFull);
        }

        let result = loop {
            match self.try_take().await {
                Ok(()) => break Ok(()),
                Err(wait) => {
                    tracing::debug!(wait_ms = wait.as_millis() as u64, "rate limited, waiting for token");
                    tokio::time::sleep(wait).await;
                }
            }
        };
        self.waiting.fetch_sub(1, Ordering::SeqCst);
        result
    }

    /// Take a token now, or report how long until the next refill.
    async fn try_take(&self) -> std::result::Result<(), Duration> {
        let mut bucket = self.state.lock().await;
        let period = self.policy.replenishment_period;

        let elapsed = bucket.last_refill.elapsed();
        let periods = (elapsed.as_nanos() / period.as_nanos()) as u32;
        if periods > 0 {
            let added = periods.saturating_mul(self.policy.tokens_per_period);
            bucket.tokens = bucket.tokens.saturating_add(added).min(self.policy.capacity);
            bucket.last_refill += period * periods;
        }

        if bucket.tokens > 0 {
            bucket.tokens -= 1;
            Ok(())
        } else {
            Err(period.saturating_sub(bucket.last_refill.elapsed()))
        }
    }
}
