//! Retry mechanism with exponential backoff

use super::backoff::Backoff;
use super::types::{RetryConfig, RetryState};
use crate::utils::error::ServiceError;
use std::future::Future;
use tracing::{debug, error, warn};

/// Retry mechanism with exponential backoff
///
/// Holds only immutable configuration, so one policy can be shared by any
/// number of concurrent calls.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    config: RetryConfig,
    backoff: Backoff,
}

impl RetryPolicy {
    /// Create a new retry policy
    pub fn new(config: RetryConfig) -> Self {
        let backoff = Backoff::from(&config);
        Self { config, backoff }
    }

    pub fn config(&self) -> &RetryConfig {
        &self.config
    }

    pub fn backoff(&self) -> &Backoff {
        &self.backoff
    }

    /// Execute `operation` with retry logic
    ///
    /// Returns the first success. When retries are exhausted a [`ServiceError`]
    /// cause is returned unchanged; any other cause is wrapped into a
    /// service-kind error carrying `original_error` and `attempts`.
    ///
    /// Waiting suspends only the calling task. Dropping the returned future
    /// cancels the loop before the next attempt starts.
    pub async fn call<F, Fut, T, E>(&self, operation: &str, mut f: F) -> Result<T, ServiceError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Into<anyhow::Error>,
    {
        let mut state: RetryState<anyhow::Error> = RetryState::new(self.config.max_retries);

        loop {
            match f().await {
                Ok(result) => {
                    if state.attempt > 0 {
                        debug!(
                            operation,
                            attempt = state.attempt + 1,
                            "Retry succeeded"
                        );
                    }
                    return Ok(result);
                }
                Err(err) => {
                    let err: anyhow::Error = err.into();
                    let message = err.to_string();

                    if !state.record_failure(err) {
                        error!(
                            operation,
                            max_retries = state.max_retries,
                            "Retry failed after reaching max retries {}: {}",
                            state.max_retries,
                            message
                        );
                        return Err(self.into_terminal_error(state));
                    }

                    let delay = self.backoff.delay(state.attempt, &mut rand::thread_rng());
                    warn!(
                        operation,
                        attempt = state.attempt,
                        max_retries = state.max_retries,
                        delay_ms = delay.as_millis() as u64,
                        "Operation failed, retrying in {:.2}s ({}/{}): {}",
                        delay.as_secs_f64(),
                        state.attempt,
                        state.max_retries,
                        message
                    );

                    tokio::time::sleep(delay).await;
                }
            }
        }
    }

    fn into_terminal_error(&self, state: RetryState<anyhow::Error>) -> ServiceError {
        let Some(last_error) = state.last_error else {
            return ServiceError::service("Operation failed without an error");
        };

        match last_error.downcast::<ServiceError>() {
            Ok(classified) => classified,
            Err(raw) => ServiceError::service(format!(
                "Operation failed after {} retries",
                state.max_retries
            ))
            .with_detail("original_error", raw.to_string())
            .with_detail("attempts", state.max_retries),
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(RetryConfig::default())
    }
}
