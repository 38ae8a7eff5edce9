//! Error handling utilities
//!
//! Classified service errors, start-up errors, and retry/backoff recovery.

pub mod error;
pub mod recovery;

pub use error::*;
pub use recovery::*;
