//! Types and configurations for retrying failed operations

use std::time::Duration;

/// Retry configuration
#[derive(Debug, Clone, PartialEq)]
pub struct RetryConfig {
    /// Retries after the first attempt; 0 means a single attempt
    pub max_retries: u32,
    /// Delay before the first retry
    pub base_delay: Duration,
    /// Upper bound for the un-jittered delay
    pub max_delay: Duration,
    /// Backoff multiplier
    pub backoff_multiplier: f64,
    /// Jitter fraction applied on both sides of the delay (0.1 = ±10%)
    pub jitter: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_secs(2),
            max_delay: Duration::from_secs(30),
            backoff_multiplier: 2.0,
            jitter: 0.1,
        }
    }
}

/// Progress of one retry loop
#[derive(Debug)]
pub struct RetryState<E> {
    /// Failed attempts so far
    pub attempt: u32,
    pub max_retries: u32,
    pub last_error: Option<E>,
}

impl<E> RetryState<E> {
    pub fn new(max_retries: u32) -> Self {
        Self {
            attempt: 0,
            max_retries,
            last_error: None,
        }
    }

    /// Record a failure and report whether another attempt is allowed
    pub fn record_failure(&mut self, error: E) -> bool {
        self.attempt += 1;
        self.last_error = Some(error);
        self.attempt <= self.max_retries
    }
}
