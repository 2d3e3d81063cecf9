//! Retry with exponential backoff for outbound HTTP calls.

use reqwest::StatusCode;
use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

/// Configuration for retry behavior
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of attempts (including the first one)
    pub max_attempts: u32,
    /// Delay before the first retry
    pub initial_delay: Duration,
    /// Upper bound on any single delay
    pub max_delay: Duration,
    /// Multiplier for exponential backoff (2.0 doubles the delay each time)
    pub backoff_multiplier: f64,
}

impl RetryConfig {
    pub fn new(max_attempts: u32, initial_delay: Duration) -> Self {
        Self {
            max_attempts,
            initial_delay,
            max_delay: Duration::from_secs(30),
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

    /// Preset: reverse geocoding (3 attempts, delays 500ms then 1s).
    pub fn geocode() -> Self {
        Self::new(3, Duration::from_millis(500)).with_max_delay(Duration::from_secs(2))
    }

    /// Preset: no retries.
    pub fn once() -> Self {
        Self::new(1, Duration::ZERO)
    }

    /// Delay before the given attempt (0-indexed). The first attempt never waits.
    fn delay_for_attempt(&self, attempt: u32) -> Duration {
        if attempt == 0 {
            return Duration::ZERO;
        }

        let delay_ms = self.initial_delay.as_millis() as f64
            * self.backoff_multiplier.powi((attempt - 1) as i32);

        Duration::from_millis(delay_ms as u64).min(self.max_delay)
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self::geocode()
    }
}

/// Non-success HTTP response, kept typed so the retry predicate can inspect it.
#[derive(Debug, thiserror::Error)]
#[error("{service} returned {status}: {body}")]
pub struct HttpStatusError {
    pub service: &'static str,
    pub status: StatusCode,
    pub body: String,
}

/// Server errors and rate limiting are transient; other 4xx are not.
pub fn is_retryable_status(status: StatusCode) -> bool {
    status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS
}

/// Retry transient HTTP statuses and network failures; fail fast on anything else.
pub fn is_retryable_error(error: &anyhow::Error) -> bool {
    if let Some(status_error) = error.downcast_ref::<HttpStatusError>() {
        return is_retryable_status(status_error.status);
    }
    if let Some(reqwest_error) = error.downcast_ref::<reqwest::Error>() {
        return reqwest_error.is_timeout()
            || reqwest_error.is_connect()
            || reqwest_error.is_request()
            || reqwest_error.status().is_some_and(is_retryable_status);
    }
    false
}

/// Execute an async operation, retrying every failure.
///
/// # Panics
/// Panics if `config.max_attempts` is 0
pub async fn with_retry<T, E, F, Fut>(
    config: &RetryConfig,
    operation_name: &str,
    operation: F,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    with_retry_if(config, operation_name, operation, |_| true).await
}

/// Execute an async operation, retrying only errors accepted by `should_retry`.
///
/// # Panics
/// Panics if `config.max_attempts` is 0
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
    assert!(
        config.max_attempts >= 1,
        "RetryConfig.max_attempts must be >= 1, got {}",
        config.max_attempts
    );

    let mut attempt = 0;
    loop {
        let delay = config.delay_for_attempt(attempt);
        if !delay.is_zero() {
            debug!(
                "{}: Retry attempt {}/{} after {:?}",
                operation_name,
                attempt + 1,
                config.max_attempts,
                delay
            );
            sleep(delay).await;
        }

        let error = match operation().await {
            Ok(result) => {
                if attempt > 0 {
                    debug!("{}: Succeeded on attempt {}", operation_name, attempt + 1);
                }
                return Ok(result);
            }
            Err(e) => e,
        };

        if !should_retry(&error) {
            debug!("{}: Not retryable: {}", operation_name, error);
            return Err(error);
        }

        attempt += 1;
        if attempt >= config.max_attempts {
            warn!(
                "{}: All {} attempts failed. Last error: {}",
                operation_name, config.max_attempts, error
            );
            return Err(error);
        }

        warn!(
            "{}: Attempt {}/{} failed ({}), {} retries remaining",
            operation_name,
            attempt,
            config.max_attempts,
            error,
            config.max_attempts - attempt
        );
    }
}
