//! Bounded exponential backoff for outbound calls.

use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

/// Retry policy for a single outbound operation.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryConfig {
    /// Total attempts including the first; 0 behaves like 1
    pub max_attempts: u32,
    /// Pause before the second attempt
    pub initial_delay: Duration,
    /// Upper bound on any single pause
    pub max_delay: Duration,
    /// Growth factor applied to the pause after each failure
    pub backoff_multiplier: f64,
}

impl RetryConfig {
    /// Create a policy that doubles the pause after each failure, capped at
    /// ten seconds.
    ///
    /// # Arguments
    /// * `max_attempts` - Total attempts including the first
    /// * `initial_delay` - Pause before the second attempt
    pub fn new(max_attempts: u32, initial_delay: Duration) -> Self {
        Self {
            max_attempts,
            initial_delay,
            max_delay: Duration::from_secs(10),
            backoff_multiplier: 2.0,
        }
    }

    pub fn with_max_delay(mut self, max_delay: Duration) -> Self {
        self.max_delay = max_delay;
        self
    }

    pub fn with_backoff_multiplier(mut self, multiplier: f64) -> Self {
        self.backoff_multiplier = multiplier;
        self
    }

    /// Weather lookups run inside a page request, so the budget is small.
    ///
    /// Delays: 250ms, 500ms (capped at 1s)
    pub fn weather() -> Self {
        Self::new(3, Duration::from_millis(250)).with_max_delay(Duration::from_secs(1))
    }

    /// A single attempt with no retry.
    ///
    /// Delays: none
    pub fn once() -> Self {
        Self::new(1, Duration::ZERO)
    }

    /// Pauses between consecutive attempts, capped at `max_delay`.
    /// Yields `max_attempts - 1` values.
    pub fn backoff(&self) -> impl Iterator<Item = Duration> + '_ {
        let retries = self.max_attempts.max(1) - 1;
        (0..retries).map(move |n| {
            let scaled = self.initial_delay.as_secs_f64() * self.backoff_multiplier.powi(n as i32);
            Duration::try_from_secs_f64(scaled)
                .unwrap_or(self.max_delay)
                .min(self.max_delay)
        })
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self::weather()
    }
}

/// Run `operation` until it succeeds or the attempts run out. The last
/// error is returned.
pub async fn with_retry<T, E, F, Fut>(config: &RetryConfig, name: &str, operation: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    with_retry_if(config, name, operation, |_| true).await
}

/// As [`with_retry`], but stops at the first error `retryable` rejects.
pub async fn with_retry_if<T, E, F, Fut, P>(
    config: &RetryConfig,
    name: &str,
    mut operation: F,
    retryable: P,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
    P: Fn(&E) -> bool,
{
    let total = config.max_attempts.max(1);
    let mut pauses = config.backoff();
    let mut attempt = 1;

    loop {
        let error = match operation().await {
            Ok(value) => {
                if attempt > 1 {
                    debug!("{} recovered on attempt {}/{}", name, attempt, total);
                }
                return Ok(value);
            }
            Err(error) => error,
        };

        if !retryable(&error) {
            debug!("{} failed with a permanent error: {}", name, error);
            return Err(error);
        }

        let Some(pause) = pauses.next() else {
            warn!("{} gave up after {} attempts: {}", name, total, error);
            return Err(error);
        };

        warn!(
            "{} attempt {}/{} failed ({}), retrying in {:?}",
            name, attempt, total, error, pause
        );
        sleep(pause).await;
        attempt += 1;
    }
}
