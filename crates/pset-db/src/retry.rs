//! Transient remote error retry logic.
//!
//! Remote libSQL (Turso) databases occasionally answer with HTTP 400 Hrana
//! errors while nodes are recycled or a shared lock is contended. Those
//! clear on their own within seconds, so queries against a remote database
//! are retried with capped exponential backoff.
//!
//! Local databases never hit these errors; `PsetDb` only enables retries for
//! remote connections.

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

/// Configuration for retry behavior on transient remote errors.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of attempts (including the initial one).
    pub max_attempts: u32,
    /// Initial delay before the first retry.
    pub base_delay: Duration,
    /// Maximum delay between retries (backoff is capped here).
    pub max_delay: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 4,
            base_delay: Duration::from_millis(100),
            max_delay: Duration::from_secs(2),
        }
    }
}

impl RetryConfig {
    /// A config that never retries.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            max_attempts: 1,
            base_delay: Duration::ZERO,
            max_delay: Duration::ZERO,
        }
    }

    /// Delay before retry number `attempt` (1-based).
    #[must_use]
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempt.saturating_sub(1));
        self.base_delay.saturating_mul(factor).min(self.max_delay)
    }
}

/// Whether an error message describes a transient remote failure.
///
/// The predicate is narrow so genuine SQL or constraint errors are never
/// retried.
#[must_use]
pub fn is_transient_message(msg: &str) -> bool {
    msg.contains("unable to acquire shared lock") || msg.contains("deletion must be in progress")
}

/// Detect transient Turso infrastructure errors.
#[must_use]
pub fn is_transient_turso_error(e: &libsql::Error) -> bool {
    is_transient_message(&e.to_string())
}

/// Run `op` until it succeeds, fails with a non-transient error, or the
/// attempt budget is spent.
///
/// # Errors
///
/// Returns the last error produced by `op`.
pub async fn with_retry<T, E, F, Fut>(config: &RetryConfig, mut op: F) -> Result<T, E>
where
    E: Display,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let mut attempt = 1;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(error)
                if attempt < config.max_attempts && is_transient_message(&error.to_string()) =>
            {
                let delay = config.delay_for(attempt);
                tracing::warn!(attempt, ?delay, %error, "transient database error, retrying");
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(error) => return Err(error),
        }
    }
}
