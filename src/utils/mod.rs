//! Utility modules for the gateway
//!
//! - **error**: error taxonomy, HTTP error envelope, retry and backoff
//! - **logging**: tracing subscriber setup and log helpers

pub mod error;
pub mod logging;
