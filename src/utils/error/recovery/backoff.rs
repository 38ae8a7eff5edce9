//! Exponential backoff with capped jitter

use super::types::RetryConfig;
use rand::Rng;
use std::time::Duration;

/// Source of the jitter offset
///
/// Returns a value in `[-fraction, +fraction]`. Every [`rand::Rng`] is a source;
/// tests plug in fixed values.
pub trait JitterSource {
    fn sample(&mut self, fraction: f64) -> f64;
}

impl<R: Rng + ?Sized> JitterSource for R {
    fn sample(&mut self, fraction: f64) -> f64 {
        if fraction > 0.0 {
            self.gen_range(-fraction..=fraction)
        } else {
            0.0
        }
    }
}

/// Delay computation for retry attempts
#[derive(Debug, Clone, PartialEq)]
pub struct Backoff {
    base: Duration,
    max: Duration,
    factor: f64,
    jitter: f64,
}

impl Backoff {
    pub fn new(base: Duration, max: Duration, factor: f64, jitter: f64) -> Self {
        Self {
            base,
            max,
            factor,
            jitter: jitter.max(0.0),
        }
    }

    /// Un-jittered delay before retry `attempt` (1-indexed), capped at `max`
    pub fn capped_delay(&self, attempt: u32) -> Duration {
        if self.base.is_zero() {
            return Duration::ZERO;
        }

        let exponent = attempt.saturating_sub(1).min(i32::MAX as u32) as i32;
        let raw = self.base.as_secs_f64() * self.factor.powi(exponent);
        let capped = raw.min(self.max.as_secs_f64());

        saturating_duration(capped)
    }

    /// Jittered delay before retry `attempt`
    ///
    /// Jitter scales the already-capped value, so the result never exceeds
    /// `max * (1 + jitter)` and never goes below zero. Values past
    /// [`Duration::MAX`] saturate.
    pub fn delay<J: JitterSource + ?Sized>(&self, attempt: u32, source: &mut J) -> Duration {
        let capped = self.capped_delay(attempt).as_secs_f64();
        let offset = source.sample(self.jitter).clamp(-self.jitter, self.jitter);
        let jittered = capped * (1.0 + offset);

        saturating_duration(jittered)
    }

    pub fn max_delay(&self) -> Duration {
        self.max
    }

    pub fn jitter(&self) -> f64 {
        self.jitter
    }
}

fn saturating_duration(secs: f64) -> Duration {
    if secs.is_nan() || secs <= 0.0 {
        Duration::ZERO
    } else {
        Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX)
    }
}

impl From<&RetryConfig> for Backoff {
    fn from(config: &RetryConfig) -> Self {
        Self::new(
            config.base_delay,
            config.max_delay,
            config.backoff_multiplier,
            config.jitter,
        )
    }
}
