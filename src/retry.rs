//! Retries for idempotent reads.
//!
//! Only GETs go through here. Writes (creating payments or merchants,
//! fee calculation, the language notification) are sent once and their
//! failure reported as is.

use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryConfig {
    /// Total attempts, the first one included. Zero behaves like one.
    pub max_attempts: u32,
    /// Wait before the second attempt; doubled for each attempt after.
    pub initial_delay: Duration,
    /// Cap on any single wait.
    pub max_delay: Duration,
}

impl RetryConfig {
    pub fn new(max_attempts: u32, initial_delay: Duration) -> Self {
        Self {
            max_attempts,
            initial_delay,
            max_delay: Duration::from_secs(5),
        }
    }

    pub fn with_max_delay(mut self, max_delay: Duration) -> Self {
        self.max_delay = max_delay;
        self
    }

    /// Reads behind a page load. The page falls back to demo data when
    /// these fail, so one short retry is enough.
    pub fn list_fetch() -> Self {
        Self::new(2, Duration::from_millis(250)).with_max_delay(Duration::from_millis(250))
    }

    pub fn single_attempt() -> Self {
        Self::new(1, Duration::ZERO)
    }

    fn attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }

    /// Wait before attempt `n` (1-based). Nothing before the first.
    fn backoff(&self, n: u32) -> Duration {
        if n <= 1 {
            return Duration::ZERO;
        }
        let doublings = (n - 2).min(16);
        self.initial_delay
            .saturating_mul(1 << doublings)
            .min(self.max_delay)
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self::list_fetch()
    }
}

/// Run `operation` until it succeeds, `should_retry` rejects its error, or
/// the attempts run out. The last error is returned unchanged.
pub async fn with_retry_if<T, E, F, Fut, P>(
    config: &RetryConfig,
    operation_name: &str,
    mut operation: F,
    should_retry: P,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
    P: Fn(&E) -> bool,
{
    let attempts = config.attempts();
    let mut n = 1;

    loop {
        let wait = config.backoff(n);
        if !wait.is_zero() {
            sleep(wait).await;
        }

        let error = match operation().await {
            Ok(value) => {
                if n > 1 {
                    debug!("{} recovered on attempt {}", operation_name, n);
                }
                return Ok(value);
            }
            Err(error) => error,
        };

        if n == attempts {
            if attempts > 1 {
                warn!("{} gave up after {} attempts: {}", operation_name, attempts, error);
            }
            return Err(error);
        }
        if !should_retry(&error) {
            debug!("{} failed permanently: {}", operation_name, error);
            return Err(error);
        }

        warn!("{} attempt {}/{} failed: {}", operation_name, n, attempts, error);
        n += 1;
    }
}
