//! Retry configuration for provider calls

use super::default_max_retries;
use crate::utils::error::RetryConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Largest accepted retry delay, in seconds
pub const MAX_RETRY_DELAY_SECS: f64 = 3600.0;

/// Retry settings as written in the configuration file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RetrySettings {
    /// Retries after the first attempt
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    /// Delay before the first retry, in seconds
    #[serde(default = "default_base_delay_secs")]
    pub base_delay_secs: f64,
    /// Cap for the un-jittered delay, in seconds
    #[serde(default = "default_max_delay_secs")]
    pub max_delay_secs: f64,
    #[serde(default = "default_backoff_multiplier")]
    pub backoff_multiplier: f64,
    /// Jitter fraction (0.1 = ±10%)
    #[serde(default = "default_jitter")]
    pub jitter: f64,
}

impl Default for RetrySettings {
    fn default() -> Self {
        Self {
            max_retries: default_max_retries(),
            base_delay_secs: default_base_delay_secs(),
            max_delay_secs: default_max_delay_secs(),
            backoff_multiplier: default_backoff_multiplier(),
            jitter: default_jitter(),
        }
    }
}

impl RetrySettings {
    /// Executor configuration; call after validation
    pub fn to_retry_config(&self) -> RetryConfig {
        RetryConfig {
            max_retries: self.max_retries,
            base_delay: delay_from_secs(self.base_delay_secs),
            max_delay: delay_from_secs(self.max_delay_secs),
            backoff_multiplier: self.backoff_multiplier,
            jitter: self.jitter,
        }
    }
}

/// Out-of-range values are clamped and NaN becomes zero
fn delay_from_secs(secs: f64) -> Duration {
    Duration::try_from_secs_f64(secs.clamp(0.0, MAX_RETRY_DELAY_SECS)).unwrap_or(Duration::ZERO)
}

fn default_base_delay_secs() -> f64 {
    2.0
}

fn default_max_delay_secs() -> f64 {
    30.0
}

fn default_backoff_multiplier() -> f64 {
    2.0
}

fn default_jitter() -> f64 {
    0.1
}
