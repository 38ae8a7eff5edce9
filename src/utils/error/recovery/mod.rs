//! Error recovery utilities
//!
//! Exponential backoff with jitter and the retrying executor built on it.

mod backoff;
mod retry;
mod types;

pub use backoff::{Backoff, JitterSource};
pub use retry::RetryPolicy;
pub use types::{RetryConfig, RetryState};
